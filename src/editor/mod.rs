//! Task editor session module.
//!
//! This module contains the presentation logic of the task create/edit screen:
//! - `EditorController` turning actions into events and events into state
//! - Session `Mode` and `EditorState` snapshots
//! - `Action`/`Event` types and the cancel confirmation options
//! - Editor error handling

mod action;
mod controller;
mod error;
mod state;

pub use action::{Action, CancelAlertAction, Event};
pub use controller::{Dispatch, EditorController, DEFAULT_CONFIRM_MESSAGE, DEFAULT_CONFIRM_TITLE};
pub use error::EditorError;
pub use state::{EditorState, Mode};
