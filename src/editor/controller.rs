//! Editor session controller: action dispatch, event derivation and reduction.

use super::action::{Action, CancelAlertAction, Event};
use super::error::EditorError;
use super::state::{EditorState, Mode};
use crate::alert::{self, AlertService};
use crate::task::TaskService;
use log::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

pub const DEFAULT_CONFIRM_TITLE: &str = "Really?";
pub const DEFAULT_CONFIRM_MESSAGE: &str = "All changes will be lost";

/// Specify what happened to a dispatched action.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Dispatch {
    /// The action produced an event that was applied to the state.
    Applied(Event),
    /// The action was processed but produced no event.
    NoEvent,
    /// The action was dropped because another action was still outstanding
    /// or the session was already dismissed.
    Ignored,
}

/// Clears the in-flight flag when an action finishes, including on error.
///
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns the state of one task create/edit session.
///
/// Actions are turned into events by [`EditorController::mutate`] and
/// events are folded into new snapshots by [`EditorController::reduce`].
/// [`EditorController::send`] runs both steps and publishes the result to
/// every subscriber.
///
pub struct EditorController {
    mode: Mode,
    initial_task_title: String,
    state: watch::Sender<EditorState>,
    in_flight: AtomicBool,
    task_service: Arc<dyn TaskService>,
    alert_service: Arc<dyn AlertService>,
    confirm_title: String,
    confirm_message: String,
}

impl EditorController {
    /// Return a new session for the given mode and collaborators.
    ///
    pub fn new(
        mode: Mode,
        task_service: Arc<dyn TaskService>,
        alert_service: Arc<dyn AlertService>,
    ) -> Self {
        let initial_state = EditorState::initial(&mode);
        debug!(
            "Starting '{}' editor session with title '{}'...",
            initial_state.screen_title, initial_state.task_title
        );
        let (state, _) = watch::channel(initial_state.clone());
        EditorController {
            mode,
            initial_task_title: initial_state.task_title,
            state,
            in_flight: AtomicBool::new(false),
            task_service,
            alert_service,
            confirm_title: DEFAULT_CONFIRM_TITLE.to_owned(),
            confirm_message: DEFAULT_CONFIRM_MESSAGE.to_owned(),
        }
    }

    /// Replace the title and message of the discard-changes confirmation.
    ///
    pub fn with_confirmation(mut self, title: &str, message: &str) -> Self {
        self.confirm_title = title.to_owned();
        self.confirm_message = message.to_owned();
        self
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Return a copy of the current state snapshot.
    ///
    pub fn current_state(&self) -> EditorState {
        self.state.borrow().clone()
    }

    /// Return a receiver that observes every new state snapshot.
    ///
    pub fn subscribe(&self) -> watch::Receiver<EditorState> {
        self.state.subscribe()
    }

    /// Process one action: derive its event, apply it and publish the new
    /// state. Errors leave the state untouched.
    ///
    pub async fn send(&self, action: Action) -> Result<Dispatch, EditorError> {
        let is_dismissed = self.state.borrow().is_dismissed;
        if is_dismissed {
            warn!("Ignoring action {:?} on dismissed session.", action);
            return Ok(Dispatch::Ignored);
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Ignoring action {:?} while another action is outstanding.", action);
            return Ok(Dispatch::Ignored);
        }
        let _guard = InFlight(&self.in_flight);

        debug!("Processing editor action {:?}...", action);
        let event = match self.mutate(action).await {
            Ok(Some(event)) => event,
            Ok(None) => return Ok(Dispatch::NoEvent),
            Err(e) => {
                error!("Editor action failed: {}", e);
                return Err(e);
            }
        };

        debug!("Applying editor event {:?}...", event);
        let next = self.reduce(self.current_state(), &event);
        if next.is_dismissed {
            info!("Editor session dismissed.");
        }
        self.state.send_replace(next);
        Ok(Dispatch::Applied(event))
    }

    /// Derive the event for an action against the current state. May call
    /// the task service or present the cancel confirmation.
    ///
    pub async fn mutate(&self, action: Action) -> Result<Option<Event>, EditorError> {
        match action {
            Action::UpdateTitle(title) => Ok(Some(Event::TitleChanged(title))),
            Action::Submit => self.submit().await,
            Action::Cancel => self.cancel().await,
        }
    }

    /// Apply an event to a state, returning the next state.
    ///
    pub fn reduce(&self, state: EditorState, event: &Event) -> EditorState {
        let mut state = state;
        match event {
            Event::TitleChanged(title) => {
                state.can_submit = !title.is_empty();
                state.should_confirm_cancel = *title != self.initial_task_title;
                state.task_title = title.clone();
            }
            Event::Dismiss => {
                state.is_dismissed = true;
            }
        }
        state
    }

    async fn submit(&self) -> Result<Option<Event>, EditorError> {
        let state = self.current_state();
        if !state.can_submit {
            debug!("Skipping submit of empty title.");
            return Ok(None);
        }
        match &self.mode {
            Mode::New => {
                info!("Creating task '{}'...", state.task_title);
                self.task_service.create(&state.task_title, None).await?;
            }
            Mode::Edit(task) => {
                info!("Updating task {} to '{}'...", task.id, state.task_title);
                self.task_service
                    .update(&task.id, &state.task_title, None)
                    .await?;
            }
        }
        Ok(Some(Event::Dismiss))
    }

    async fn cancel(&self) -> Result<Option<Event>, EditorError> {
        if !self.current_state().should_confirm_cancel {
            return Ok(Some(Event::Dismiss));
        }
        let choice = alert::present(
            self.alert_service.as_ref(),
            &self.confirm_title,
            &self.confirm_message,
            &[CancelAlertAction::Leave, CancelAlertAction::Stay],
        )
        .await?;
        match choice {
            Some(CancelAlertAction::Leave) => Ok(Some(Event::Dismiss)),
            Some(CancelAlertAction::Stay) => Ok(None),
            None => Err(EditorError::AlertNoSelection),
        }
    }
}
