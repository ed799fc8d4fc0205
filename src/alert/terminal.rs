use super::{Alert, AlertError, AlertService, AlertStyle};
use async_trait::async_trait;
use log::*;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, Lines};
use tokio::sync::Mutex;

/// Line reader shared between the host's command loop and the alert prompt.
///
pub type SharedLines<R> = Arc<Mutex<Lines<R>>>;

/// Presents alerts as numbered prompts on a line-oriented terminal.
///
/// A choice is entered by number or by label. Empty input or end of input
/// dismisses the alert without a selection; anything else prompts again.
///
pub struct TerminalAlertService<R, W> {
    input: SharedLines<R>,
    output: std::sync::Mutex<W>,
}

impl<R, W> TerminalAlertService<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    /// Return new instance reading choices from `input` and writing prompts
    /// to `output`.
    ///
    pub fn new(input: SharedLines<R>, output: W) -> Self {
        TerminalAlertService {
            input,
            output: std::sync::Mutex::new(output),
        }
    }

    fn write_prompt(&self, alert: &Alert) -> Result<(), AlertError> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| AlertError::Presentation("output lock poisoned".to_string()))?;
        let mut text = format!("{}\n{}\n", alert.title, alert.message);
        for (i, option) in alert.options.iter().enumerate() {
            let marker = match option.style {
                AlertStyle::Destructive => " (!)",
                AlertStyle::Cancel | AlertStyle::Default => "",
            };
            text.push_str(&format!("  {}) {}{}\n", i + 1, option.label, marker));
        }
        text.push_str("> ");
        output
            .write_all(text.as_bytes())
            .and_then(|_| output.flush())
            .map_err(|e| AlertError::Presentation(e.to_string()))
    }
}

/// Match an answer against the alert's options by number or label.
///
fn parse_choice(answer: &str, alert: &Alert) -> Option<usize> {
    if let Ok(number) = answer.parse::<usize>() {
        if number >= 1 && number <= alert.options.len() {
            return Some(number - 1);
        }
        return None;
    }
    alert
        .options
        .iter()
        .position(|o| o.label.eq_ignore_ascii_case(answer))
}

#[async_trait]
impl<R, W> AlertService for TerminalAlertService<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn show(&self, alert: Alert) -> Result<Option<usize>, AlertError> {
        debug!("Presenting alert '{}'...", alert.title);
        let mut input = self.input.lock().await;
        loop {
            self.write_prompt(&alert)?;
            let line = input
                .next_line()
                .await
                .map_err(|e| AlertError::Presentation(e.to_string()))?;
            let answer = match line {
                Some(line) => line.trim().to_owned(),
                None => return Ok(None),
            };
            if answer.is_empty() {
                return Ok(None);
            }
            match parse_choice(&answer, &alert) {
                Some(index) => return Ok(Some(index)),
                None => warn!("Unrecognized alert answer '{}'.", answer),
            }
        }
    }
}
