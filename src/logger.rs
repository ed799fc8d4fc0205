//! Custom logging module.
//!
//! This module provides a logger implementation that formats log records
//! with a UTC timestamp and writes them to a shared sink.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::Mutex;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger that writes formatted records at or above a level to a sink
///
pub struct CustomLogger {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter, sink: Box<dyn Write + Send>) -> Self {
        CustomLogger {
            level,
            sink: Mutex::new(sink),
        }
    }

    /// Install this logger as the global `log` backend.
    ///
    pub fn init(self) -> Result<(), AppError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // A poisoned sink drops the record
            if let Ok(mut sink) = self.sink.lock() {
                let _ = writeln!(sink, "{}", format_log(record));
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn log_at(logger: &CustomLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("task_editor")
                .build(),
        );
    }

    #[test]
    fn format_log_has_level_and_message() {
        let line = format_log(
            &Record::builder()
                .args(format_args!("Creating task"))
                .level(Level::Warn)
                .build(),
        );
        assert!(line.ends_with("WARN Creating task"));
    }

    #[test]
    fn filters_below_level() {
        let buffer = Buffer::default();
        let logger = CustomLogger::new(LevelFilter::Info, Box::new(buffer.clone()));
        log_at(&logger, Level::Debug, "hidden");
        log_at(&logger, Level::Error, "shown");
        logger.flush();

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(!output.contains("hidden"));
        assert!(output.contains("ERROR shown"));
        assert_eq!(1, output.lines().count());
    }
}
