//! Alert and confirmation contract consumed by the editor.
//!
//! An [`AlertService`] presents a single-choice alert and resolves with the
//! index of the selected option, or `None` when the alert was dismissed
//! without a choice. Typed option sets implement [`AlertAction`] and go
//! through [`present`], which maps the index back to the typed value.

mod error;
mod terminal;

pub use error::AlertError;
pub use terminal::{SharedLines, TerminalAlertService};

use async_trait::async_trait;

/// Visual weight of an alert option.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AlertStyle {
    Default,
    Cancel,
    Destructive,
}

/// Single selectable alert option.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AlertOption {
    pub label: String,
    pub style: AlertStyle,
}

/// Alert presentation request.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub options: Vec<AlertOption>,
}

/// Typed option that can be shown in an alert.
///
pub trait AlertAction: Copy {
    fn title(&self) -> &'static str;
    fn style(&self) -> AlertStyle;
}

/// Presents alerts to the user.
///
#[async_trait]
pub trait AlertService: Send + Sync {
    /// Show the alert and wait for the user. Returns the index of the selected
    /// option, or `None` if the alert was dismissed without a choice.
    async fn show(&self, alert: Alert) -> Result<Option<usize>, AlertError>;
}

/// Show `actions` through `service` and return the action the user picked.
///
pub async fn present<A: AlertAction>(
    service: &dyn AlertService,
    title: &str,
    message: &str,
    actions: &[A],
) -> Result<Option<A>, AlertError> {
    let alert = Alert {
        title: title.to_owned(),
        message: message.to_owned(),
        options: actions
            .iter()
            .map(|a| AlertOption {
                label: a.title().to_owned(),
                style: a.style(),
            })
            .collect(),
    };
    match service.show(alert).await? {
        None => Ok(None),
        Some(index) => actions
            .get(index)
            .copied()
            .map(Some)
            .ok_or(AlertError::InvalidSelection {
                index,
                options: actions.len(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    enum Answer {
        Yes,
        No,
    }

    impl AlertAction for Answer {
        fn title(&self) -> &'static str {
            match self {
                Answer::Yes => "Yes",
                Answer::No => "No",
            }
        }

        fn style(&self) -> AlertStyle {
            match self {
                Answer::Yes => AlertStyle::Default,
                Answer::No => AlertStyle::Cancel,
            }
        }
    }

    struct Fixed {
        selection: Option<usize>,
        shown: Mutex<Vec<Alert>>,
    }

    #[async_trait]
    impl AlertService for Fixed {
        async fn show(&self, alert: Alert) -> Result<Option<usize>, AlertError> {
            self.shown.lock().unwrap().push(alert);
            Ok(self.selection)
        }
    }

    fn fixed(selection: Option<usize>) -> Fixed {
        Fixed {
            selection,
            shown: Mutex::new(vec![]),
        }
    }

    #[tokio::test]
    async fn present_builds_options_in_order() {
        let service = fixed(Some(1));
        let picked = present(&service, "Sure?", "Think twice", &[Answer::Yes, Answer::No])
            .await
            .unwrap();
        assert_eq!(Some(Answer::No), picked);

        let shown = service.shown.lock().unwrap();
        assert_eq!(1, shown.len());
        assert_eq!("Sure?", shown[0].title);
        assert_eq!("Think twice", shown[0].message);
        assert_eq!(
            vec![
                AlertOption {
                    label: "Yes".to_string(),
                    style: AlertStyle::Default
                },
                AlertOption {
                    label: "No".to_string(),
                    style: AlertStyle::Cancel
                },
            ],
            shown[0].options
        );
    }

    #[tokio::test]
    async fn present_without_selection() {
        let service = fixed(None);
        let picked = present(&service, "t", "m", &[Answer::Yes]).await.unwrap();
        assert_eq!(None, picked);
    }

    #[tokio::test]
    async fn present_rejects_out_of_range_selection() {
        let service = fixed(Some(5));
        let result = present(&service, "t", "m", &[Answer::Yes, Answer::No]).await;
        assert_eq!(
            Err(AlertError::InvalidSelection {
                index: 5,
                options: 2
            }),
            result
        );
    }
}
