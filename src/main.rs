use anyhow::Result;
use clap::Arg;
use log::*;
use std::sync::Arc;
use task_editor::alert::{SharedLines, TerminalAlertService};
use task_editor::app::App;
use task_editor::config::Config;
use task_editor::editor::{EditorController, Mode};
use task_editor::logger::CustomLogger;
use task_editor::task::{MemoryTaskService, Task};
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = clap::App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("edit")
                .short("e")
                .long("edit")
                .value_name("TITLE")
                .help("Open an existing task with this title instead of a new one")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("memo")
                .short("m")
                .long("memo")
                .value_name("MEMO")
                .help("Memo of the task opened with --edit")
                .takes_value(true)
                .requires("edit"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    CustomLogger::new(config.level_filter()?, Box::new(std::io::stderr())).init()?;

    let tasks = Arc::new(MemoryTaskService::new());
    let mode = match matches.value_of("edit") {
        Some(title) => {
            let task = Task::new(title, matches.value_of("memo"));
            tasks.insert(task.clone()).await;
            Mode::Edit(task)
        }
        None => Mode::New,
    };

    let input: SharedLines<BufReader<Stdin>> =
        Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()));
    let alerts = Arc::new(TerminalAlertService::new(input.clone(), std::io::stdout()));
    let controller = EditorController::new(mode, tasks.clone(), alerts)
        .with_confirmation(&config.confirm_title, &config.confirm_message);

    let mut app = App::new(controller, input, std::io::stdout());
    if !app.run().await? {
        warn!("Editor closed without being dismissed.");
    }

    for task in tasks.tasks().await {
        match task.memo {
            Some(memo) => println!("{}  {} ({})", task.id, task.title, memo),
            None => println!("{}  {}", task.id, task.title),
        }
    }
    Ok(())
}
