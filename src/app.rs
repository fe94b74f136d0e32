//! Retro Board Frontend App
//!
//! Demo host: in-memory store, capability wiring and the three columns.

use std::sync::Arc;

use leptos::prelude::*;
use console_logger::LogHandle;
use reactive_stores::Store;

use crate::actions::RetroAction;
use crate::components::{LogPanel, RetroColumn};
use crate::context::RetroContext;
use crate::dispatcher::{Dispatcher, JsDispatcher};
use crate::models::{Category, RetroItem};
use crate::scroll::{ScrollOptions, WindowScroller};
use crate::store::{RetroState, RetroStateStoreFields, StoreDispatcher};

/// Viewports narrower than this get the mobile card
const MOBILE_MAX_WIDTH: f64 = 640.0;

/// Applies actions locally and mirrors them to the page's store, if one is
/// installed at `window.RetroBoard`.
struct BoardDispatcher {
    local: StoreDispatcher,
    external: Option<JsDispatcher>,
}

impl Dispatcher for BoardDispatcher {
    fn dispatch(&self, action: RetroAction) {
        if let Some(external) = &self.external {
            external.dispatch(action.clone());
        }
        self.local.dispatch(action);
    }
}

fn has_external_store() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &"RetroBoard".into()).unwrap_or(false))
        .unwrap_or(false)
}

fn detect_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width < MOBILE_MAX_WIDTH)
        .unwrap_or(false)
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Highlight scroll timing; jumps instead of animating for reduced motion
fn scroll_options(reduced_motion: bool) -> ScrollOptions {
    if reduced_motion {
        ScrollOptions { duration: 0, ..ScrollOptions::default() }
    } else {
        ScrollOptions::default()
    }
}

fn seed_items() -> Vec<RetroItem> {
    let seed = [
        (1, "Pairing rotation worked well", Category::Happy),
        (2, "Shipped the release on time", Category::Happy),
        (3, "Standups run long", Category::Meh),
        (4, "Flaky CI on main", Category::Sad),
    ];
    seed.into_iter()
        .map(|(id, description, category)| RetroItem {
            id,
            description: description.to_string(),
            vote_count: 0,
            category,
            done: false,
        })
        .collect()
}

#[component]
pub fn App(log_handle: Option<LogHandle>) -> impl IntoView {
    let store = Store::new(RetroState {
        is_mobile: detect_mobile(),
        ..RetroState::new("demo-retro", seed_items())
    });

    let external = has_external_store().then_some(JsDispatcher);
    log::info!("[APP] external store: {}", external.is_some());

    let dispatcher = BoardDispatcher {
        local: StoreDispatcher::new(store),
        external,
    };
    provide_context(
        RetroContext::new(Arc::new(dispatcher), Arc::new(WindowScroller))
            .with_scroll_options(scroll_options(prefers_reduced_motion())),
    );

    view! {
        <div class="retro-board">
            <header class="retro-header">
                <h1>"Retro"</h1>
                <label class="mode-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || store.archives().get()
                        on:change=move |ev| store.archives().set(event_target_checked(&ev))
                    />
                    "Archived"
                </label>
                <label class="mode-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || store.is_mobile().get()
                        on:change=move |ev| store.is_mobile().set(event_target_checked(&ev))
                    />
                    "Mobile"
                </label>
            </header>
            <div class="retro-columns">
                {Category::ALL
                    .into_iter()
                    .map(|category| view! { <RetroColumn category=category store=store /> })
                    .collect_view()}
            </div>
            {log_handle.map(|handle| view! { <LogPanel handle=handle /> })}
        </div>
    }
}
