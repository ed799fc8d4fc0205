//! Inputs and state-changing events of an editor session.

use crate::alert::{AlertAction, AlertStyle};

/// Specify user intents accepted by the editor.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
    UpdateTitle(String),
    Cancel,
    Submit,
}

/// Specify state-changing events derived from actions.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Event {
    TitleChanged(String),
    Dismiss,
}

/// Options of the discard-changes confirmation.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CancelAlertAction {
    Leave,
    Stay,
}

impl AlertAction for CancelAlertAction {
    fn title(&self) -> &'static str {
        match self {
            CancelAlertAction::Leave => "Leave",
            CancelAlertAction::Stay => "Stay",
        }
    }

    fn style(&self) -> AlertStyle {
        match self {
            CancelAlertAction::Leave => AlertStyle::Destructive,
            CancelAlertAction::Stay => AlertStyle::Default,
        }
    }
}
