//! Frontend Models
//!
//! Data structures matching the retro store entities.

use serde::{Deserialize, Serialize};

/// Column a retro item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Happy,
    Meh,
    Sad,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Happy, Category::Meh, Category::Sad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Happy => "happy",
            Category::Meh => "meh",
            Category::Sad => "sad",
        }
    }
}

/// Retro item data structure (matches store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetroItem {
    pub id: u32,
    pub description: String,
    pub vote_count: u32,
    pub category: Category,
    pub done: bool,
}

impl RetroItem {
    /// DOM anchor the scroller targets for this item
    pub fn anchor(&self) -> String {
        format!("retro-item-{}", self.id)
    }
}
