use chrono::Local;
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Prints timestamped log lines from the core to stderr
struct StderrLogger {
    level: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        eprintln!("[{}] {:5} {}", timestamp, record.level(), record.args());
    }

    fn flush(&self) {}
}

pub fn init(level: Level) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level.to_level_filter());

    Ok(())
}
