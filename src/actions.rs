//! Retro Actions
//!
//! Closed set of intents the item card hands to the dispatcher.
//! Serialized as `{ "type": ..., "data": ... }`.

use serde::{Deserialize, Serialize};

use crate::models::RetroItem;

/// An action descriptor as consumed by the retro store.
///
/// `doneRetroItem` and `undoneRetroItem` key the retro as `retroId` while the
/// rest use `retro_id`. The store reads those exact keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum RetroAction {
    DeleteRetroItem {
        retro_id: String,
        item: RetroItem,
    },
    UpdateRetroItem {
        retro_id: String,
        item: RetroItem,
        description: String,
    },
    VoteRetroItem {
        retro_id: String,
        item: RetroItem,
    },
    HighlightRetroItem {
        retro_id: String,
        item: RetroItem,
    },
    UnhighlightRetroItem {
        retro_id: String,
    },
    DoneRetroItem {
        #[serde(rename = "retroId")]
        retro_id: String,
        item: RetroItem,
    },
    UndoneRetroItem {
        item: RetroItem,
        #[serde(rename = "retroId")]
        retro_id: String,
    },
}

impl RetroAction {
    /// Wire name of the action
    pub fn kind(&self) -> &'static str {
        match self {
            RetroAction::DeleteRetroItem { .. } => "deleteRetroItem",
            RetroAction::UpdateRetroItem { .. } => "updateRetroItem",
            RetroAction::VoteRetroItem { .. } => "voteRetroItem",
            RetroAction::HighlightRetroItem { .. } => "highlightRetroItem",
            RetroAction::UnhighlightRetroItem { .. } => "unhighlightRetroItem",
            RetroAction::DoneRetroItem { .. } => "doneRetroItem",
            RetroAction::UndoneRetroItem { .. } => "undoneRetroItem",
        }
    }

    pub fn retro_id(&self) -> &str {
        match self {
            RetroAction::DeleteRetroItem { retro_id, .. }
            | RetroAction::UpdateRetroItem { retro_id, .. }
            | RetroAction::VoteRetroItem { retro_id, .. }
            | RetroAction::HighlightRetroItem { retro_id, .. }
            | RetroAction::UnhighlightRetroItem { retro_id }
            | RetroAction::DoneRetroItem { retro_id, .. }
            | RetroAction::UndoneRetroItem { retro_id, .. } => retro_id,
        }
    }
}
