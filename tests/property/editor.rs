//! Property-based tests for the task editor state machine.
//!
//! Uses proptest to verify:
//! 1. Valid creates append exactly one trimmed task and clear the draft.
//! 2. Invalid creates change nothing.
//! 3. Begin-edit then cancel restores the draft and leaves the list alone.
//! 4. Valid saves mutate in place and restore the draft.
//! 5. Invalid saves leave the task alone but still end the edit.
//! 6. Deleting the edit target ends the edit and removes the task.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use taskpad_core::{
    Draft, Editor, EditorError, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, Mode, ValidationError,
};

// --- Strategies ---

/// Optional surrounding whitespace.
fn arb_padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

/// Text of `min..=max` characters with no surrounding whitespace.
fn arb_trimmed_text(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9%!é]", min..=max).prop_map(|chars| chars.concat())
}

/// A valid title, possibly padded with whitespace.
fn arb_valid_title() -> impl Strategy<Value = (String, String)> {
    (arb_padding(), arb_trimmed_text(1, MAX_TITLE_LENGTH), arb_padding())
        .prop_map(|(l, core, r)| (format!("{l}{core}{r}"), core))
}

/// A valid description, possibly padded with whitespace.
fn arb_valid_description() -> impl Strategy<Value = (String, String)> {
    (
        arb_padding(),
        arb_trimmed_text(1, MAX_DESCRIPTION_LENGTH),
        arb_padding(),
    )
        .prop_map(|(l, core, r)| (format!("{l}{core}{r}"), core))
}

/// A title that fails validation: blank or too long.
fn arb_invalid_title() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_padding(),
        arb_trimmed_text(MAX_TITLE_LENGTH + 1, MAX_TITLE_LENGTH + 20),
    ]
}

/// A description that fails validation: blank or too long.
fn arb_invalid_description() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_padding(),
        arb_trimmed_text(MAX_DESCRIPTION_LENGTH + 1, MAX_DESCRIPTION_LENGTH + 20),
    ]
}

/// A `(title, description)` pair where at least one field is invalid.
fn arb_invalid_pair() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        (arb_invalid_title(), arb_valid_description().prop_map(|(raw, _)| raw)),
        (arb_valid_title().prop_map(|(raw, _)| raw), arb_invalid_description()),
        (arb_invalid_title(), arb_invalid_description()),
    ]
}

/// Any staged draft, valid or not.
fn arb_draft() -> impl Strategy<Value = Draft> {
    (".{0,50}", ".{0,130}").prop_map(|(t, d)| Draft::new(t, d))
}

/// Editor seeded with `1..5` tasks, plus an index into them.
fn arb_seeded_editor() -> impl Strategy<Value = (Editor, usize)> {
    prop::collection::vec((arb_valid_title(), arb_valid_description()), 1..5).prop_flat_map(
        |pairs| {
            let len = pairs.len();
            let mut editor = Editor::new();
            for ((title, _), (description, _)) in &pairs {
                editor.create_task(title, description).unwrap();
            }
            (Just(editor), 0..len)
        },
    )
}

// --- Property tests ---

proptest! {
    /// A valid create appends one task with trimmed text and clears the draft.
    #[test]
    fn valid_create_appends_trimmed(
        (raw_title, title) in arb_valid_title(),
        (raw_description, description) in arb_valid_description(),
    ) {
        let mut editor = Editor::new();
        editor.set_title(raw_title.clone());
        editor.set_description(raw_description.clone());

        let id = editor.create_task(&raw_title, &raw_description).unwrap();

        prop_assert_eq!(editor.tasks().len(), 1);
        let task = editor.task(id).unwrap();
        prop_assert_eq!(task.title(), title.as_str());
        prop_assert_eq!(task.description(), description.as_str());
        prop_assert_eq!(editor.draft(), &Draft::default());
    }

    /// An invalid create adds nothing and keeps the staged text.
    #[test]
    fn invalid_create_changes_nothing((title, description) in arb_invalid_pair()) {
        let mut editor = Editor::new();
        editor.set_title(title.clone());
        editor.set_description(description.clone());

        let result = editor.create_task(&title, &description);

        prop_assert!(matches!(result, Err(EditorError::Validation(_))));
        prop_assert!(editor.tasks().is_empty());
        prop_assert_eq!(editor.draft(), &Draft::new(title, description));
    }

    /// Begin-edit then cancel restores the draft exactly.
    #[test]
    fn cancel_restores_draft((mut editor, idx) in arb_seeded_editor(), draft in arb_draft()) {
        editor.set_title(draft.title.clone());
        editor.set_description(draft.description.clone());
        let before = editor.task_list().clone();
        let id = editor.tasks()[idx].id();

        editor.begin_edit(id).unwrap();
        editor.cancel_edit();

        prop_assert_eq!(editor.mode(), Mode::Creating);
        prop_assert_eq!(editor.draft(), &draft);
        prop_assert_eq!(editor.task_list(), &before);
    }

    /// A valid save overwrites the target in place and restores the draft.
    #[test]
    fn valid_save_mutates_in_place(
        (mut editor, idx) in arb_seeded_editor(),
        draft in arb_draft(),
        (raw_title, title) in arb_valid_title(),
        (raw_description, description) in arb_valid_description(),
    ) {
        editor.set_title(draft.title.clone());
        editor.set_description(draft.description.clone());
        let len = editor.tasks().len();
        let id = editor.tasks()[idx].id();

        editor.begin_edit(id).unwrap();
        editor.save_edit(&raw_title, &raw_description).unwrap();

        prop_assert_eq!(editor.tasks().len(), len);
        let task = &editor.tasks()[idx];
        prop_assert_eq!(task.id(), id);
        prop_assert_eq!(task.title(), title.as_str());
        prop_assert_eq!(task.description(), description.as_str());
        prop_assert_eq!(editor.mode(), Mode::Creating);
        prop_assert_eq!(editor.draft(), &draft);
    }

    /// An invalid save keeps the task unchanged but still leaves edit mode.
    #[test]
    fn invalid_save_exits_edit(
        (mut editor, idx) in arb_seeded_editor(),
        draft in arb_draft(),
        (title, description) in arb_invalid_pair(),
    ) {
        editor.set_title(draft.title.clone());
        editor.set_description(draft.description.clone());
        let before = editor.task_list().clone();
        let id = editor.tasks()[idx].id();

        editor.begin_edit(id).unwrap();
        let result = editor.save_edit(&title, &description);

        prop_assert!(matches!(result, Err(EditorError::Validation(_))));
        prop_assert_eq!(editor.task_list(), &before);
        prop_assert_eq!(editor.mode(), Mode::Creating);
        prop_assert_eq!(editor.draft(), &draft);
    }

    /// Deleting the edit target ends the edit and removes only that task.
    #[test]
    fn delete_target_ends_edit((mut editor, idx) in arb_seeded_editor(), draft in arb_draft()) {
        editor.set_title(draft.title.clone());
        editor.set_description(draft.description.clone());
        let len = editor.tasks().len();
        let id = editor.tasks()[idx].id();

        editor.begin_edit(id).unwrap();
        editor.delete_task(id);

        prop_assert_eq!(editor.mode(), Mode::Creating);
        prop_assert_eq!(editor.editing_target(), None);
        prop_assert_eq!(editor.draft(), &draft);
        prop_assert_eq!(editor.tasks().len(), len - 1);
        prop_assert!(editor.task(id).is_none());
    }
}

// --- Worked example ---

#[test]
fn buy_milk_then_empty_title() {
    let mut editor = Editor::new();
    editor.set_title("Buy milk");
    editor.set_description("2% organic");
    editor.commit().unwrap();

    assert_eq!(editor.tasks().len(), 1);
    assert_eq!(editor.tasks()[0].title(), "Buy milk");
    assert_eq!(editor.tasks()[0].description(), "2% organic");

    editor.set_title("");
    editor.set_description("anything");
    let err = editor.commit().unwrap_err();

    assert_eq!(err, EditorError::Validation(ValidationError::TitleEmpty));
    assert_eq!(err.to_string(), "Title can not be empty.");
    assert_eq!(editor.tasks().len(), 1);
}
