//! Retro Item Card Logic
//!
//! Everything the item card decides, kept free of the DOM: which classes it
//! wears, which controls it shows and which action a gesture turns into.

use crate::actions::RetroAction;
use crate::models::RetroItem;

/// Inputs the parent renders the card with
#[derive(Clone, Copy, Debug)]
pub struct CardProps<'a> {
    pub retro_id: &'a str,
    pub item: &'a RetroItem,
    pub highlighted_item_id: Option<u32>,
    /// Read-only view of a closed retro
    pub archives: bool,
    pub is_mobile: bool,
}

impl CardProps<'_> {
    pub fn is_highlighted(&self) -> bool {
        self.highlighted_item_id == Some(self.item.id)
    }

    /// Another item is under discussion
    pub fn is_lowlighted(&self) -> bool {
        matches!(self.highlighted_item_id, Some(id) if id != self.item.id)
    }
}

/// Local editing state of one card
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { text: String },
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    /// Current content of the edit field
    pub fn text(&self) -> &str {
        match self {
            EditState::Editing { text } => text,
            EditState::Viewing => "",
        }
    }

    pub fn can_save(&self) -> bool {
        match self {
            EditState::Editing { text } => !text.trim().is_empty(),
            EditState::Viewing => false,
        }
    }
}

/// User gestures the card reacts to
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    EditClick,
    DeleteClick,
    TextClick,
    VoteClick,
    DoneClick,
    CancelClick,
    EditInput(String),
    EditKey { key: String, shift: bool },
    SaveClick,
    /// Close the edit panel without saving
    EditCancel,
}

/// What the card renders for a given set of props and local state
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub classes: String,
    pub editing: bool,
    pub show_edit: bool,
    /// Done / cancel controls of the item under discussion
    pub show_highlight_controls: bool,
    pub vote_enabled: bool,
    pub save_disabled: bool,
}

impl CardView {
    pub fn new(props: &CardProps, state: &EditState) -> Self {
        let mut classes = String::from("retro-item");
        if props.is_highlighted() {
            classes.push_str(" highlight");
        }
        if props.is_lowlighted() {
            classes.push_str(" lowlight");
        }
        if props.item.done {
            classes.push_str(" discussed");
        }
        // A panel left open on a card that is no longer editable is not shown
        let editing = state.is_editing() && can_edit(props);
        if editing {
            classes.push_str(" editing");
        }

        Self {
            classes,
            editing,
            show_edit: can_edit(props),
            show_highlight_controls: props.is_highlighted() && !props.archives,
            vote_enabled: !props.archives,
            save_disabled: !editing || !state.can_save(),
        }
    }
}

/// Edit and delete are offered only on a live, undiscussed card on desktop
/// while nothing is being discussed.
fn can_edit(props: &CardProps) -> bool {
    !props.item.done && !props.archives && !props.is_mobile && props.highlighted_item_id.is_none()
}

/// Drop back to viewing when the card stopped being editable mid-edit, e.g.
/// it was marked done, archived, or another item got highlighted.
/// Returns true if an open edit was discarded.
pub fn close_if_locked(props: &CardProps, state: &mut EditState) -> bool {
    if state.is_editing() && !can_edit(props) {
        *state = EditState::Viewing;
        return true;
    }
    false
}

/// Apply a gesture to the card. Returns the action to dispatch, if any.
pub fn handle(props: &CardProps, state: &mut EditState, gesture: Gesture) -> Option<RetroAction> {
    close_if_locked(props, state);

    let retro_id = props.retro_id.to_string();
    let item = props.item;

    match gesture {
        Gesture::EditClick => {
            if can_edit(props) && !state.is_editing() {
                *state = EditState::Editing { text: item.description.clone() };
            }
            None
        }
        Gesture::DeleteClick => {
            if !state.is_editing() || props.archives {
                return None;
            }
            *state = EditState::Viewing;
            Some(RetroAction::DeleteRetroItem { retro_id, item: item.clone() })
        }
        Gesture::TextClick => {
            if state.is_editing() || props.archives || props.is_mobile {
                None
            } else if props.is_highlighted() {
                Some(RetroAction::UnhighlightRetroItem { retro_id })
            } else {
                Some(RetroAction::HighlightRetroItem { retro_id, item: item.clone() })
            }
        }
        Gesture::VoteClick => {
            if props.archives {
                return None;
            }
            Some(RetroAction::VoteRetroItem { retro_id, item: item.clone() })
        }
        Gesture::DoneClick => {
            if !props.is_highlighted() || props.archives || props.is_mobile {
                return None;
            }
            Some(RetroAction::DoneRetroItem { retro_id, item: item.clone() })
        }
        Gesture::CancelClick => {
            if !props.is_highlighted() || props.archives {
                None
            } else if item.done {
                let item = RetroItem { done: false, ..item.clone() };
                Some(RetroAction::UndoneRetroItem { item, retro_id })
            } else {
                Some(RetroAction::UnhighlightRetroItem { retro_id })
            }
        }
        Gesture::EditInput(value) => {
            if let EditState::Editing { text } = state {
                *text = value;
            }
            None
        }
        Gesture::EditKey { key, shift } => match key.as_str() {
            "Enter" if !shift => save(props, state),
            "Escape" => {
                *state = EditState::Viewing;
                None
            }
            _ => None,
        },
        Gesture::SaveClick => save(props, state),
        Gesture::EditCancel => {
            *state = EditState::Viewing;
            None
        }
    }
}

fn save(props: &CardProps, state: &mut EditState) -> Option<RetroAction> {
    if !state.can_save() {
        return None;
    }
    let description = state.text().to_string();
    *state = EditState::Viewing;
    Some(RetroAction::UpdateRetroItem {
        retro_id: props.retro_id.to_string(),
        item: props.item.clone(),
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::spy::SpyDispatcher;
    use crate::dispatcher::Dispatcher;
    use crate::models::Category;

    const RETRO_ID: &str = "retro-slug-123";

    fn happy_item() -> RetroItem {
        RetroItem {
            id: 2,
            description: "the happy retro item".to_string(),
            vote_count: 1,
            category: Category::Happy,
            done: false,
        }
    }

    fn discussed_item() -> RetroItem {
        RetroItem {
            id: 20,
            description: "the discussed retro item".to_string(),
            vote_count: 10,
            category: Category::Happy,
            done: true,
        }
    }

    /// A mounted card wired to a spy dispatcher
    struct Card {
        item: RetroItem,
        highlighted_item_id: Option<u32>,
        archives: bool,
        is_mobile: bool,
        state: EditState,
        dispatcher: SpyDispatcher,
    }

    impl Card {
        fn desktop(item: RetroItem, highlighted_item_id: Option<u32>) -> Self {
            Self {
                item,
                highlighted_item_id,
                archives: false,
                is_mobile: false,
                state: EditState::Viewing,
                dispatcher: SpyDispatcher::default(),
            }
        }

        fn props(&self) -> CardProps<'_> {
            CardProps {
                retro_id: RETRO_ID,
                item: &self.item,
                highlighted_item_id: self.highlighted_item_id,
                archives: self.archives,
                is_mobile: self.is_mobile,
            }
        }

        fn gesture(&mut self, gesture: Gesture) {
            let props = CardProps {
                retro_id: RETRO_ID,
                item: &self.item,
                highlighted_item_id: self.highlighted_item_id,
                archives: self.archives,
                is_mobile: self.is_mobile,
            };
            if let Some(action) = handle(&props, &mut self.state, gesture) {
                self.dispatcher.dispatch(action);
            }
        }

        fn view(&self) -> CardView {
            CardView::new(&self.props(), &self.state)
        }

        fn type_text(&mut self, text: &str) {
            self.gesture(Gesture::EditInput(text.to_string()));
        }

        fn press(&mut self, key: &str) {
            self.gesture(Gesture::EditKey { key: key.to_string(), shift: false });
        }
    }

    fn has_class(view: &CardView, class: &str) -> bool {
        view.classes.split(' ').any(|c| c == class)
    }

    #[test]
    fn test_plain_card() {
        let card = Card::desktop(happy_item(), None);
        let view = card.view();
        assert_eq!(view.classes, "retro-item");
        assert!(view.show_edit);
        assert!(view.vote_enabled);
        assert!(!view.show_highlight_controls);
    }

    #[test]
    fn test_edit_click_opens_edit_menu() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);

        let view = card.view();
        assert!(has_class(&view, "editing"));
        assert_eq!(card.state.text(), "the happy retro item");
        assert!(card.dispatcher.actions().is_empty());
    }

    #[test]
    fn test_delete_while_editing() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.gesture(Gesture::DeleteClick);

        assert_eq!(
            card.dispatcher.actions(),
            vec![RetroAction::DeleteRetroItem { retro_id: RETRO_ID.to_string(), item: happy_item() }]
        );
        assert!(!card.dispatcher.has_received_kind("updateRetroItem"));
    }

    #[test]
    fn test_text_click_while_editing_does_not_highlight() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.gesture(Gesture::TextClick);
        assert!(!card.dispatcher.has_received_kind("highlightRetroItem"));
    }

    fn expect_updated(card: &Card) {
        assert!(card.dispatcher.has_received(&RetroAction::UpdateRetroItem {
            retro_id: RETRO_ID.to_string(),
            item: happy_item(),
            description: "an updated retro item".to_string(),
        }));
        assert!(!has_class(&card.view(), "editing"));
    }

    #[test]
    fn test_save_click_updates_item() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.type_text("an updated retro item");
        assert!(!card.view().save_disabled);
        card.gesture(Gesture::SaveClick);
        expect_updated(&card);
    }

    #[test]
    fn test_enter_key_updates_item() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.type_text("an updated retro item");
        card.press("Enter");
        expect_updated(&card);
    }

    #[test]
    fn test_shift_enter_does_not_save() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.type_text("two\nlines");
        card.gesture(Gesture::EditKey { key: "Enter".to_string(), shift: true });
        assert!(card.state.is_editing());
        assert!(card.dispatcher.actions().is_empty());
    }

    #[test]
    fn test_empty_value_disables_save() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.type_text("");
        assert!(card.view().save_disabled);

        card.gesture(Gesture::SaveClick);
        card.press("Enter");
        assert!(!card.dispatcher.has_received_kind("updateRetroItem"));
        assert!(card.state.is_editing());
    }

    #[test]
    fn test_whitespace_only_value_disables_save() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.type_text("   \n ");
        assert!(card.view().save_disabled);
    }

    #[test]
    fn test_escape_and_cancel_leave_edit_without_dispatch() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.type_text("never saved");
        card.press("Escape");
        assert!(!card.state.is_editing());

        card.gesture(Gesture::EditClick);
        assert_eq!(card.state.text(), "the happy retro item");
        card.gesture(Gesture::EditCancel);
        assert!(!card.state.is_editing());
        assert!(card.dispatcher.actions().is_empty());
    }

    #[test]
    fn test_edit_panel_closes_when_item_is_done() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.type_text("changed elsewhere");
        card.item.done = true;

        let view = card.view();
        assert!(!view.editing);
        assert!(!has_class(&view, "editing"));
        assert!(view.save_disabled);

        card.gesture(Gesture::DeleteClick);
        card.gesture(Gesture::SaveClick);
        assert!(card.dispatcher.actions().is_empty());
        assert!(!card.state.is_editing());
    }

    #[test]
    fn test_edit_panel_closes_when_archived() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.type_text("an updated retro item");
        card.archives = true;

        assert!(!card.view().editing);
        card.press("Enter");
        card.gesture(Gesture::SaveClick);
        card.gesture(Gesture::DeleteClick);
        assert!(card.dispatcher.actions().is_empty());
    }

    #[test]
    fn test_edit_panel_closes_when_other_item_highlighted() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::EditClick);
        card.highlighted_item_id = Some(5);

        let view = card.view();
        assert!(!view.editing);
        assert!(has_class(&view, "lowlight"));

        card.gesture(Gesture::EditInput("late typing".to_string()));
        card.gesture(Gesture::DeleteClick);
        assert!(card.dispatcher.actions().is_empty());
        assert!(!card.state.is_editing());

        // Editing again once the discussion ends starts from the description
        card.highlighted_item_id = None;
        card.gesture(Gesture::EditClick);
        assert_eq!(card.state.text(), "the happy retro item");
    }

    #[test]
    fn test_close_if_locked() {
        let item = happy_item();
        let mut state = EditState::Editing { text: "x".to_string() };
        let mut props = CardProps {
            retro_id: RETRO_ID,
            item: &item,
            highlighted_item_id: None,
            archives: false,
            is_mobile: false,
        };
        assert!(!close_if_locked(&props, &mut state));
        assert!(state.is_editing());

        props.is_mobile = true;
        assert!(close_if_locked(&props, &mut state));
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_vote_click_dispatches_vote() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::VoteClick);
        assert_eq!(
            card.dispatcher.actions(),
            vec![RetroAction::VoteRetroItem { retro_id: RETRO_ID.to_string(), item: happy_item() }]
        );
    }

    #[test]
    fn test_text_click_highlights() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::TextClick);
        assert!(card.dispatcher.has_received(&RetroAction::HighlightRetroItem {
            retro_id: RETRO_ID.to_string(),
            item: happy_item(),
        }));
    }

    #[test]
    fn test_other_item_highlighted() {
        let mut card = Card::desktop(happy_item(), Some(5));
        let view = card.view();
        assert!(has_class(&view, "lowlight"));
        assert!(!has_class(&view, "highlight"));
        assert!(!view.show_edit);

        card.gesture(Gesture::EditClick);
        assert!(!card.state.is_editing());

        // Switching discussion to this item is still allowed
        card.gesture(Gesture::TextClick);
        assert!(card.dispatcher.has_received_kind("highlightRetroItem"));
    }

    #[test]
    fn test_highlighted_item() {
        let mut card = Card::desktop(happy_item(), Some(2));
        let view = card.view();
        assert!(has_class(&view, "highlight"));
        assert!(!has_class(&view, "lowlight"));
        assert!(view.show_highlight_controls);

        card.gesture(Gesture::TextClick);
        assert_eq!(
            card.dispatcher.actions(),
            vec![RetroAction::UnhighlightRetroItem { retro_id: RETRO_ID.to_string() }]
        );
    }

    #[test]
    fn test_done_click_marks_discussed() {
        let mut card = Card::desktop(happy_item(), Some(2));
        card.gesture(Gesture::DoneClick);
        assert!(card.dispatcher.has_received(&RetroAction::DoneRetroItem {
            retro_id: RETRO_ID.to_string(),
            item: happy_item(),
        }));
    }

    #[test]
    fn test_done_click_ignored_when_not_highlighted() {
        let mut card = Card::desktop(happy_item(), None);
        card.gesture(Gesture::DoneClick);
        card.gesture(Gesture::CancelClick);
        assert!(card.dispatcher.actions().is_empty());
    }

    #[test]
    fn test_cancel_click_unhighlights() {
        let mut card = Card::desktop(happy_item(), Some(2));
        card.gesture(Gesture::CancelClick);
        assert!(card.dispatcher.has_received(&RetroAction::UnhighlightRetroItem {
            retro_id: RETRO_ID.to_string(),
        }));
    }

    #[test]
    fn test_discussed_item() {
        let mut card = Card::desktop(discussed_item(), None);
        let view = card.view();
        assert!(has_class(&view, "discussed"));
        assert!(!view.show_edit);

        card.gesture(Gesture::EditClick);
        card.gesture(Gesture::DeleteClick);
        assert!(!card.state.is_editing());
        assert!(card.dispatcher.actions().is_empty());
    }

    #[test]
    fn test_cancel_on_highlighted_discussed_item_dispatches_undone() {
        let mut card = Card::desktop(discussed_item(), Some(20));
        card.gesture(Gesture::CancelClick);

        let expected = RetroItem {
            id: 20,
            description: "the discussed retro item".to_string(),
            vote_count: 10,
            category: Category::Happy,
            done: false,
        };
        assert_eq!(
            card.dispatcher.actions(),
            vec![RetroAction::UndoneRetroItem { item: expected, retro_id: RETRO_ID.to_string() }]
        );
        // The rendered item is untouched
        assert!(card.item.done);
    }

    #[test]
    fn test_archived_item() {
        let mut card = Card::desktop(happy_item(), None);
        card.archives = true;

        let view = card.view();
        assert!(!view.show_edit);
        assert!(!view.vote_enabled);

        card.gesture(Gesture::TextClick);
        card.gesture(Gesture::VoteClick);
        card.gesture(Gesture::EditClick);
        card.gesture(Gesture::DeleteClick);
        card.gesture(Gesture::TextClick);
        assert!(card.dispatcher.actions().is_empty());
    }

    #[test]
    fn test_mobile_does_not_highlight() {
        let mut card = Card::desktop(happy_item(), Some(1));
        card.is_mobile = true;
        card.gesture(Gesture::TextClick);
        assert!(!card.dispatcher.has_received_kind("highlightRetroItem"));
        assert!(!card.view().show_edit);
    }

    #[test]
    fn test_mobile_does_not_mark_done() {
        let mut card = Card::desktop(happy_item(), Some(2));
        card.is_mobile = true;
        card.gesture(Gesture::DoneClick);
        card.gesture(Gesture::TextClick);
        assert!(!card.dispatcher.has_received_kind("doneRetroItem"));
        assert!(!card.dispatcher.has_received_kind("unhighlightRetroItem"));
    }

    #[test]
    fn test_mobile_still_votes() {
        let mut card = Card::desktop(happy_item(), None);
        card.is_mobile = true;
        card.gesture(Gesture::VoteClick);
        assert!(card.dispatcher.has_received_kind("voteRetroItem"));
    }
}
