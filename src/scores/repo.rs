use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// Best-score record, at most one row per user.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BestScore {
    pub id: i64,
    pub user_id: i64,
    pub best_score: i64,
    pub updated_at: OffsetDateTime,
}

impl BestScore {
    pub async fn get_by_user(db: &PgPool, user_id: i64) -> anyhow::Result<Option<BestScore>> {
        let row = sqlx::query_as::<_, BestScore>(
            r#"
            SELECT id, user_id, best_score, updated_at
            FROM user_best_scores
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Record `score` if it beats the stored best. The guarded upsert is a
    /// single statement, so concurrent submissions for one user keep the
    /// true maximum. Also creates the row if registration never did.
    /// Non-negativity is the caller's responsibility.
    pub async fn submit(db: &PgPool, user_id: i64, score: i64) -> anyhow::Result<BestScore> {
        let updated = sqlx::query_as::<_, BestScore>(
            r#"
            INSERT INTO user_best_scores (user_id, best_score)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE
                SET best_score = EXCLUDED.best_score, updated_at = now()
                WHERE user_best_scores.best_score < EXCLUDED.best_score
            RETURNING id, user_id, best_score, updated_at
            "#,
        )
        .bind(user_id)
        .bind(score)
        .fetch_optional(db)
        .await?;

        // No row back means the stored best already matched or beat `score`.
        match updated {
            Some(row) => Ok(row),
            None => Self::get_by_user(db, user_id)
                .await?
                .ok_or_else(|| anyhow::anyhow!("best score row missing for user {user_id}")),
        }
    }

    /// Highest best score across all users; ties go to the lowest user id.
    pub async fn global_best(db: &PgPool) -> anyhow::Result<Option<BestScore>> {
        let row = sqlx::query_as::<_, BestScore>(
            r#"
            SELECT id, user_id, best_score, updated_at
            FROM user_best_scores
            ORDER BY best_score DESC, user_id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
