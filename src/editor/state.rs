//! Editor session mode and state snapshot.

use crate::task::Task;

/// Specifying whether the session creates a task or edits one.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Mode {
    New,
    Edit(Task),
}

impl Mode {
    /// Return the screen title shown for this mode.
    ///
    pub fn screen_title(&self) -> &'static str {
        match self {
            Mode::New => "New",
            Mode::Edit(_) => "Edit",
        }
    }
}

/// Immutable snapshot of the editor state.
///
/// Snapshots are produced by the controller only; hosts observe them.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EditorState {
    pub(super) screen_title: String,
    pub(super) task_title: String,
    pub(super) can_submit: bool,
    pub(super) should_confirm_cancel: bool,
    pub(super) is_dismissed: bool,
}

impl EditorState {
    /// Return the seed state for the given mode.
    ///
    pub fn initial(mode: &Mode) -> EditorState {
        let (task_title, can_submit) = match mode {
            Mode::New => (String::new(), false),
            Mode::Edit(task) => (task.title.clone(), true),
        };
        EditorState {
            screen_title: mode.screen_title().to_owned(),
            task_title,
            can_submit,
            should_confirm_cancel: false,
            is_dismissed: false,
        }
    }

    pub fn screen_title(&self) -> &str {
        &self.screen_title
    }

    pub fn task_title(&self) -> &str {
        &self.task_title
    }

    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    pub fn should_confirm_cancel(&self) -> bool {
        self.should_confirm_cancel
    }

    pub fn is_dismissed(&self) -> bool {
        self.is_dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn initial_new() {
        let state = EditorState::initial(&Mode::New);
        assert_eq!("New", state.screen_title());
        assert_eq!("", state.task_title());
        assert!(!state.can_submit());
        assert!(!state.should_confirm_cancel());
        assert!(!state.is_dismissed());
    }

    #[test]
    fn initial_edit() {
        let task: Task = Faker.fake();
        let state = EditorState::initial(&Mode::Edit(task.clone()));
        assert_eq!("Edit", state.screen_title());
        assert_eq!(task.title, state.task_title());
        assert!(state.can_submit());
        assert!(!state.should_confirm_cancel());
        assert!(!state.is_dismissed());
    }
}
