// Shared prompt fragments.
// Each feature module that calls the LLM defines its own prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt fragment for handlers that pass the model's text straight through.
pub const PLAIN_TEXT_SYSTEM: &str = "Respond with the requested text only. \
    Do NOT add a preamble, headings, quotation marks, or closing remarks. \
    Do NOT use markdown formatting.";

/// Keeps generated career content anchored to what the user actually provided.
pub const NO_FABRICATION: &str = "\
    Never invent employers, titles, dates, degrees, certifications or metrics. \
    If the input does not support a claim, leave it out.";

/// Joins a role-specific system prompt with a shared fragment.
pub fn system_with(role: &str, fragment: &str) -> String {
    format!("{role} {fragment}")
}

/// Substitutes `{name}` placeholders in one pass over `template`. Inserted
/// values are never rescanned, so braces in user text stay literal. Unknown
/// placeholders (and JSON examples in the template) are left as they are.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
