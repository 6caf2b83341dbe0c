use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u64,
    pub shares: u64,
}

impl Engagement {
    pub fn total(&self) -> u64 {
        self.likes + self.shares
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub timestamp: DateTime<Utc>,
    pub platform: String,
    pub content: String,
    pub user: String,
    pub engagement: Engagement,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}
