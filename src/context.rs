//! Application Context
//!
//! Capabilities shared with item cards via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::actions::RetroAction;
use crate::dispatcher::Dispatcher;
use crate::scroll::{ScrollOptions, Scroller};

/// Dispatcher and scroller the cards talk to
#[derive(Clone)]
pub struct RetroContext {
    dispatcher: Arc<dyn Dispatcher>,
    scroller: Arc<dyn Scroller>,
    /// Timing used when a card becomes highlighted
    pub scroll_options: ScrollOptions,
}

impl RetroContext {
    pub fn new(dispatcher: Arc<dyn Dispatcher>, scroller: Arc<dyn Scroller>) -> Self {
        Self {
            dispatcher,
            scroller,
            scroll_options: ScrollOptions::default(),
        }
    }

    pub fn with_scroll_options(mut self, scroll_options: ScrollOptions) -> Self {
        self.scroll_options = scroll_options;
        self
    }

    pub fn dispatch(&self, action: RetroAction) {
        self.dispatcher.dispatch(action);
    }

    /// Bring an anchor into view with the configured timing
    pub fn scroll_to(&self, anchor: &str) {
        self.scroller.scroll_to(anchor, self.scroll_options);
    }
}

/// Get the retro context from the component tree
pub fn use_retro_context() -> RetroContext {
    expect_context::<RetroContext>()
}
