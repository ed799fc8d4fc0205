//! Presentation logic for a task create/edit screen.
//!
//! The [`editor::EditorController`] owns the state of one editing session.
//! It turns user actions into events, folds events into immutable state
//! snapshots, and talks to a [`task::TaskService`] and an
//! [`alert::AlertService`] supplied by the host.

pub mod alert;
pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod logger;
pub mod task;
