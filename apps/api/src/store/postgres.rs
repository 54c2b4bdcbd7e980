use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::achievement::{AchievementRow, NewAchievement};
use crate::models::profile::{ProfileRow, ProfileUpsert};
use crate::models::resume::ResumeRow;
use crate::models::session::SessionRow;
use crate::store::Store;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_session(&self, token: &str) -> Result<Option<SessionRow>, AppError> {
        let session = sqlx::query_as::<_, SessionRow>(
            "SELECT token, user_id, expires_at FROM sessions WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(session)
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        let profile = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(profile)
    }

    async fn complete_onboarding(&self, profile: &ProfileUpsert) -> Result<ProfileRow, AppError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles
                (user_id, full_name, headline, current_position, target_position,
                 experience_level, industries, career_goals, onboarding_completed)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE)
            ON CONFLICT (user_id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                headline = EXCLUDED.headline,
                current_position = EXCLUDED.current_position,
                target_position = EXCLUDED.target_position,
                experience_level = EXCLUDED.experience_level,
                industries = EXCLUDED.industries,
                career_goals = EXCLUDED.career_goals,
                onboarding_completed = TRUE,
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.full_name)
        .bind(&profile.headline)
        .bind(&profile.current_position)
        .bind(&profile.target_position)
        .bind(profile.experience_level.as_str())
        .bind(&profile.industries)
        .bind(&profile.career_goals)
        .fetch_one(&self.pool)
        .await?;

        info!("Onboarding completed for user {}", profile.user_id);
        Ok(row)
    }

    async fn get_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        let resume = sqlx::query_as::<_, ResumeRow>(
            "SELECT user_id, document, updated_at FROM resumes WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(resume)
    }

    async fn save_resume(&self, user_id: Uuid, document: &Value) -> Result<ResumeRow, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (user_id, document)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET
                document = EXCLUDED.document,
                updated_at = now()
            RETURNING user_id, document, updated_at
            "#,
        )
        .bind(user_id)
        .bind(document)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_achievements(&self, user_id: Uuid) -> Result<Vec<AchievementRow>, AppError> {
        let rows = sqlx::query_as::<_, AchievementRow>(
            "SELECT * FROM achievements WHERE user_id = $1 ORDER BY achieved_on DESC, created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_achievements(
        &self,
        user_id: Uuid,
        achievements: &[NewAchievement],
    ) -> Result<Vec<AchievementRow>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut rows = Vec::with_capacity(achievements.len());

        for achievement in achievements {
            let row = sqlx::query_as::<_, AchievementRow>(
                r#"
                INSERT INTO achievements
                    (id, user_id, title, description, achieved_on, category, provenance)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(&achievement.title)
            .bind(&achievement.description)
            .bind(achievement.achieved_on)
            .bind(achievement.category.as_str())
            .bind(achievement.provenance.as_str())
            .fetch_one(&mut *tx)
            .await?;
            rows.push(row);
        }

        tx.commit().await?;
        info!("Inserted {} achievements for user {user_id}", rows.len());
        Ok(rows)
    }

    async fn delete_achievement(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
