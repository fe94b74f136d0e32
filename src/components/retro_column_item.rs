//! Retro Column Item Component
//!
//! Card for one retro item: voting, editing, highlighting and discussion
//! controls. Decisions are made by `crate::card`; this file only wires them
//! to the DOM.

use leptos::prelude::*;

use crate::card::{close_if_locked, handle, CardProps, CardView, EditState, Gesture};
use crate::context::use_retro_context;
use crate::models::RetroItem;
use crate::scroll::HighlightTracker;

/// A single retro item card
#[component]
pub fn RetroColumnItem(
    #[prop(into)] retro_id: Signal<String>,
    #[prop(into)] item: Signal<RetroItem>,
    #[prop(into)] highlighted_item_id: Signal<Option<u32>>,
    #[prop(into)] archives: Signal<bool>,
    #[prop(into)] is_mobile: Signal<bool>,
) -> impl IntoView {
    let ctx = use_retro_context();
    let edit_state = RwSignal::new(EditState::Viewing);

    // Derived classes and control visibility
    let view_model = Memo::new(move |_| {
        let retro_id = retro_id.get();
        let item = item.get();
        let props = CardProps {
            retro_id: &retro_id,
            item: &item,
            highlighted_item_id: highlighted_item_id.get(),
            archives: archives.get(),
            is_mobile: is_mobile.get(),
        };
        edit_state.with(|state| CardView::new(&props, state))
    });

    // Gesture -> action, evaluated against the props at event time
    let gesture = {
        let ctx = ctx.clone();
        Callback::new(move |gesture: Gesture| {
            let retro_id = retro_id.get_untracked();
            let item = item.get_untracked();
            let props = CardProps {
                retro_id: &retro_id,
                item: &item,
                highlighted_item_id: highlighted_item_id.get_untracked(),
                archives: archives.get_untracked(),
                is_mobile: is_mobile.get_untracked(),
            };
            if let Some(action) = edit_state.try_update(|state| handle(&props, state, gesture)).flatten() {
                ctx.dispatch(action);
            }
        })
    };

    // Discard an open edit once the card is done, archived or lowlit
    Effect::new(move |_| {
        let retro_id = retro_id.get();
        let item = item.get();
        let props = CardProps {
            retro_id: &retro_id,
            item: &item,
            highlighted_item_id: highlighted_item_id.get(),
            archives: archives.get(),
            is_mobile: is_mobile.get(),
        };
        let mut current = edit_state.get_untracked();
        if close_if_locked(&props, &mut current) {
            edit_state.set(current);
            log::debug!("[ITEM] {} no longer editable, edit discarded", item.id);
        }
    });

    // Scroll into view when this card becomes the highlighted one
    Effect::new(move |tracker: Option<HighlightTracker>| {
        let highlighted = highlighted_item_id.get() == Some(item.with(|i| i.id));
        let mut tracker = tracker.unwrap_or_else(|| HighlightTracker::new(highlighted));
        if tracker.observe(highlighted) {
            let anchor = item.with_untracked(|i| i.anchor());
            log::debug!("[ITEM] scrolling to {}", anchor);
            ctx.scroll_to(&anchor);
        }
        tracker
    });

    let anchor = move || item.with(|i| i.anchor());
    let vote_count = move || item.with(|i| i.vote_count);
    let description = move || item.with(|i| i.description.clone());
    let editing = move || view_model.with(|v| v.editing);
    let save_class = move || {
        if view_model.with(|v| v.save_disabled) {
            "edit-save disabled"
        } else {
            "edit-save"
        }
    };

    view! {
        <div class=move || view_model.with(|v| v.classes.clone()) id=anchor>
            <div class="item-content">
                <div class="item-vote">
                    <button
                        class="item-vote-submit"
                        prop:disabled=move || !view_model.with(|v| v.vote_enabled)
                        on:click=move |ev| {
                            ev.stop_propagation();
                            gesture.run(Gesture::VoteClick);
                        }
                    >
                        <span class="vote-count">{vote_count}</span>
                        <i class="fa fa-star"></i>
                    </button>
                </div>

                <Show when=move || !editing()>
                    <div class="item-text">
                        <button on:click=move |_| gesture.run(Gesture::TextClick)>
                            {description}
                        </button>
                    </div>
                </Show>

                <Show when=move || view_model.with(|v| v.show_edit && !v.editing)>
                    <div class="item-edit">
                        <i class="fa fa-pencil" on:click=move |_| gesture.run(Gesture::EditClick)></i>
                    </div>
                </Show>
            </div>

            // Edit panel
            <Show when=editing>
                <div class="edit-menu">
                    <div class="edit-text">
                        <textarea
                            prop:value=move || edit_state.with(|s| s.text().to_string())
                            on:input=move |ev| gesture.run(Gesture::EditInput(event_target_value(&ev)))
                            on:keydown=move |ev| {
                                let key = ev.key();
                                let shift = ev.shift_key();
                                if key == "Enter" && !shift {
                                    ev.prevent_default();
                                }
                                gesture.run(Gesture::EditKey { key, shift });
                            }
                        ></textarea>
                    </div>
                    <div class="edit-buttons">
                        <div class="edit-delete">
                            <i class="fa fa-trash-o" on:click=move |_| gesture.run(Gesture::DeleteClick)></i>
                            <span>"Delete"</span>
                        </div>
                        <button class="edit-cancel" on:click=move |_| gesture.run(Gesture::EditCancel)>
                            "Cancel"
                        </button>
                        <button
                            class=save_class
                            prop:disabled=move || view_model.with(|v| v.save_disabled)
                            on:click=move |_| gesture.run(Gesture::SaveClick)
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </Show>

            // Discussion controls
            <Show when=move || view_model.with(|v| v.show_highlight_controls)>
                <div class="item-actions">
                    <button class="retro-item-cancel" on:click=move |_| gesture.run(Gesture::CancelClick)>
                        "Cancel"
                    </button>
                    <button class="item-done" on:click=move |_| gesture.run(Gesture::DoneClick)>
                        "Done"
                    </button>
                </div>
            </Show>
        </div>
    }
}
