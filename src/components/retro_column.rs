//! Retro Column Component
//!
//! One category column of the board.

use leptos::prelude::*;

use crate::components::RetroColumnItem;
use crate::models::{Category, RetroItem};
use crate::store::{RetroStore, RetroStateStoreFields};

/// Column of item cards for one category
#[component]
pub fn RetroColumn(category: Category, store: RetroStore) -> impl IntoView {
    let items = move || store.with(|state| state.items_in(category));
    let retro_id = Signal::derive(move || store.retro_id().get());
    let highlighted_item_id = Signal::derive(move || store.highlighted_item_id().get());
    let archives = Signal::derive(move || store.archives().get());
    let is_mobile = Signal::derive(move || store.is_mobile().get());

    view! {
        <div class=format!("retro-column column-{}", category.as_str())>
            <h2 class="retro-column-title">{category.as_str()}</h2>
            <For
                each=items
                key=|item: &RetroItem| item.id
                children=move |initial: RetroItem| {
                    let id = initial.id;
                    // Follow the stored copy so votes and edits show up
                    let item = Signal::derive(move || {
                        store.items().with(|items| {
                            items.iter().find(|i| i.id == id).cloned().unwrap_or_else(|| initial.clone())
                        })
                    });
                    view! {
                        <RetroColumnItem
                            retro_id=retro_id
                            item=item
                            highlighted_item_id=highlighted_item_id
                            archives=archives
                            is_mobile=is_mobile
                        />
                    }
                }
            />
        </div>
    }
}
