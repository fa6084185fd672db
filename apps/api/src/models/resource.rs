use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostType {
    #[default]
    Free,
    Paid,
}

impl CostType {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("paid") {
            CostType::Paid
        } else {
            CostType::Free
        }
    }
}

/// A course, tutorial, or book that teaches one or more skills. Read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub id: Uuid,
    pub title: String,
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub cost_type: CostType,
    pub level: Option<String>,
    pub rating: Option<f64>,
}

impl LearningResource {
    /// True if any resource skill and `skill` contain one another, ignoring case.
    pub fn covers_skill(&self, skill: &str) -> bool {
        let wanted = skill.trim().to_lowercase();
        if wanted.is_empty() {
            return false;
        }
        self.skills.iter().any(|s| {
            let have = s.trim().to_lowercase();
            !have.is_empty() && (have.contains(&wanted) || wanted.contains(&have))
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct LearningResourceRow {
    pub id: Uuid,
    pub title: String,
    pub platform: String,
    pub url: String,
    pub skills: Option<Vec<String>>,
    pub cost_type: String,
    pub level: Option<String>,
    pub rating: Option<f64>,
}

impl From<LearningResourceRow> for LearningResource {
    fn from(row: LearningResourceRow) -> Self {
        LearningResource {
            id: row.id,
            title: row.title,
            platform: row.platform,
            url: row.url,
            skills: row.skills.unwrap_or_default(),
            cost_type: CostType::parse(&row.cost_type),
            level: row.level,
            rating: row.rating,
        }
    }
}
