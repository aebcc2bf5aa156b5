use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Request body for a score submission.
#[derive(Debug, Deserialize)]
pub struct ScoreSubmit {
    pub score: i64,
}

/// A user's best score, returned after a submission.
#[derive(Debug, Serialize)]
pub struct BestScoreOut {
    pub user_id: i64,
    pub best_score: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Global maximum; `null` until any user has a score row.
#[derive(Debug, Serialize)]
pub struct GlobalBestOut {
    pub best_score: Option<i64>,
}
