//! Log Panel Component
//!
//! Collapsible list of the most recent log lines kept by the console logger.

use console_logger::LogHandle;
use leptos::prelude::*;

/// Recent log lines, refreshed on demand
#[component]
pub fn LogPanel(handle: LogHandle) -> impl IntoView {
    let (lines, set_lines) = signal(handle.recent());
    let refresh = move |_| set_lines.set(handle.recent());

    view! {
        <details class="log-panel">
            <summary>"Log"</summary>
            <button class="log-refresh" on:click=refresh>"Refresh"</button>
            <ul class="log-lines">
                {move || lines.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </details>
    }
}
