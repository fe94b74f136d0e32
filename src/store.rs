//! Retro Board State Store
//!
//! In-memory stand-in for the retro store. Uses Leptos reactive_stores for
//! fine-grained reactivity; actions are folded in by `apply_action`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::RetroAction;
use crate::dispatcher::Dispatcher;
use crate::models::{Category, RetroItem};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct RetroState {
    pub retro_id: String,
    pub items: Vec<RetroItem>,
    /// Item currently under discussion
    pub highlighted_item_id: Option<u32>,
    pub archives: bool,
    pub is_mobile: bool,
}

impl RetroState {
    pub fn new(retro_id: impl Into<String>, items: Vec<RetroItem>) -> Self {
        Self {
            retro_id: retro_id.into(),
            items,
            ..Default::default()
        }
    }

    /// Items of one column, in board order
    pub fn items_in(&self, category: Category) -> Vec<RetroItem> {
        self.items.iter().filter(|item| item.category == category).cloned().collect()
    }

    fn item_mut(&mut self, id: u32) -> Option<&mut RetroItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

/// Type alias for the store
pub type RetroStore = Store<RetroState>;

/// Fold one action into the board state
pub fn apply_action(state: &mut RetroState, action: &RetroAction) {
    if action.retro_id() != state.retro_id {
        log::warn!("[STORE] {} for unknown retro {}", action.kind(), action.retro_id());
        return;
    }

    match action {
        RetroAction::VoteRetroItem { item, .. } => {
            if let Some(found) = state.item_mut(item.id) {
                found.vote_count = found.vote_count.saturating_add(1);
            }
        }
        RetroAction::UpdateRetroItem { item, description, .. } => {
            if let Some(found) = state.item_mut(item.id) {
                found.description = description.clone();
            }
        }
        RetroAction::DeleteRetroItem { item, .. } => {
            state.items.retain(|i| i.id != item.id);
            if state.highlighted_item_id == Some(item.id) {
                state.highlighted_item_id = None;
            }
        }
        RetroAction::HighlightRetroItem { item, .. } => {
            state.highlighted_item_id = Some(item.id);
        }
        RetroAction::UnhighlightRetroItem { .. } => {
            state.highlighted_item_id = None;
        }
        RetroAction::DoneRetroItem { item, .. } => {
            if let Some(found) = state.item_mut(item.id) {
                found.done = true;
            }
            state.highlighted_item_id = None;
        }
        RetroAction::UndoneRetroItem { item, .. } => {
            if let Some(found) = state.item_mut(item.id) {
                found.done = false;
            }
            state.highlighted_item_id = None;
        }
    }
}

/// Routes actions into a `RetroStore`
#[derive(Clone, Copy)]
pub struct StoreDispatcher {
    store: RetroStore,
}

impl StoreDispatcher {
    pub fn new(store: RetroStore) -> Self {
        Self { store }
    }
}

impl Dispatcher for StoreDispatcher {
    fn dispatch(&self, action: RetroAction) {
        log::debug!("[STORE] {}", action.kind());
        self.store.update(|state| apply_action(state, &action));
    }
}
