use crate::alert::SharedLines;
use crate::editor::{Action, Dispatch, EditorController, EditorState};
use crate::error::AppResult;
use log::*;
use std::io::Write;
use tokio::io::AsyncBufRead;

const HELP: &str = "Commands:
  title <text>  replace the task title
  submit        save the task and close the editor
  cancel        close the editor, confirming if there are changes
  state         print the current editor state
  help          print this message";

/// Specify commands accepted by the line-oriented host.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Editor(Action),
    State,
    Help,
}

impl Command {
    /// Parse one input line into a command.
    ///
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim_start();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line.trim_end(), ""));
        match word {
            "title" => Some(Command::Editor(Action::UpdateTitle(rest.trim_end().to_owned()))),
            "submit" => Some(Command::Editor(Action::Submit)),
            "cancel" => Some(Command::Editor(Action::Cancel)),
            "state" => Some(Command::State),
            "help" => Some(Command::Help),
            _ => None,
        }
    }
}

/// Render a state snapshot as a single line.
///
pub fn describe(state: &EditorState) -> String {
    format!(
        "[{}] title: '{}' | submit: {} | confirm cancel: {}{}",
        state.screen_title(),
        state.task_title(),
        if state.can_submit() { "on" } else { "off" },
        if state.should_confirm_cancel() { "yes" } else { "no" },
        if state.is_dismissed() { " | dismissed" } else { "" },
    )
}

/// Drives one editor session from line input and prints every new state.
///
pub struct App<R, W> {
    controller: EditorController,
    input: SharedLines<R>,
    output: W,
}

impl<R, W> App<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write,
{
    pub fn new(controller: EditorController, input: SharedLines<R>, output: W) -> Self {
        App {
            controller,
            input,
            output,
        }
    }

    pub fn controller(&self) -> &EditorController {
        &self.controller
    }

    /// Read commands until the session is dismissed or input ends. Returns
    /// whether the session was dismissed.
    ///
    pub async fn run(&mut self) -> AppResult<bool> {
        info!("Starting editor session...");
        self.print_state()?;
        loop {
            let line = self.input.lock().await.next_line().await?;
            let line = match line {
                Some(line) => line,
                None => {
                    info!("Input closed before the session was dismissed.");
                    return Ok(false);
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Some(Command::Editor(action)) => self.dispatch(action).await?,
                Some(Command::State) => self.print_state()?,
                Some(Command::Help) => writeln!(self.output, "{}", HELP)?,
                None => writeln!(self.output, "Unknown command '{}'. Type 'help'.", line.trim())?,
            }
            if self.controller.current_state().is_dismissed() {
                info!("Exiting editor session...");
                return Ok(true);
            }
        }
    }

    async fn dispatch(&mut self, action: Action) -> AppResult<()> {
        match self.controller.send(action).await {
            Ok(Dispatch::Applied(_)) => self.print_state()?,
            Ok(Dispatch::NoEvent) => writeln!(self.output, "Nothing changed.")?,
            Ok(Dispatch::Ignored) => writeln!(self.output, "Busy, try again.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn print_state(&mut self) -> AppResult<()> {
        let state = self.controller.current_state();
        writeln!(self.output, "{}", describe(&state))?;
        Ok(())
    }
}
