//! Scroll Capability
//!
//! Animates the viewport so a highlighted card sits in the middle of the screen.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Timing for a scroll animation, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOptions {
    pub delay: u32,
    pub duration: u32,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self { delay: 0, duration: 300 }
    }
}

/// Animate viewport position to a named anchor
pub trait Scroller: Send + Sync {
    fn scroll_to(&self, anchor: &str, options: ScrollOptions);
}

/// Tracks highlight state across renders and reports when it switches on.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighlightTracker {
    highlighted: bool,
}

impl HighlightTracker {
    pub fn new(highlighted: bool) -> Self {
        Self { highlighted }
    }

    /// Record the latest highlight state; true only on a not-highlighted to
    /// highlighted transition.
    pub fn observe(&mut self, highlighted: bool) -> bool {
        let became = highlighted && !self.highlighted;
        self.highlighted = highlighted;
        became
    }
}

const FRAME_MS: u32 = 16;

/// Scrolls the browser window
#[derive(Clone, Copy, Default)]
pub struct WindowScroller;

impl Scroller for WindowScroller {
    fn scroll_to(&self, anchor: &str, options: ScrollOptions) {
        let anchor = anchor.to_string();
        spawn_local(async move {
            if options.delay > 0 {
                TimeoutFuture::new(options.delay).await;
            }
            if let Err(e) = animate_to(&anchor, options.duration).await {
                log::warn!("[SCROLL] {}: {}", anchor, e);
            }
        });
    }
}

async fn animate_to(anchor: &str, duration: u32) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let element = document
        .get_element_by_id(anchor)
        .ok_or_else(|| "anchor not found".to_string())?;

    let rect = element.get_bounding_client_rect();
    let start = window.scroll_y().map_err(|e| format!("{:?}", e))?;
    let viewport = window
        .inner_height()
        .map_err(|e| format!("{:?}", e))?
        .as_f64()
        .unwrap_or(0.0);
    let target = centred_offset(start, rect.top(), rect.height(), viewport);
    let x = window.scroll_x().unwrap_or(0.0);

    let steps = (duration / FRAME_MS).max(1);
    for step in 1..=steps {
        let progress = ease_in_out(step as f64 / steps as f64);
        window.scroll_to_with_x_and_y(x, start + (target - start) * progress);
        if step < steps {
            TimeoutFuture::new(FRAME_MS).await;
        }
    }
    Ok(())
}

/// Page offset that puts an element of `height` at `top` (viewport relative)
/// in the vertical centre of the viewport.
fn centred_offset(scroll_y: f64, top: f64, height: f64, viewport: f64) -> f64 {
    (scroll_y + top - (viewport - height) / 2.0).max(0.0)
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
