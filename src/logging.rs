use std::env;

use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Initialize logging at `default_level`, overridable through the
/// `BATTLESHIP_SIM_LOG` environment variable.
pub fn init_logging(default_level: LevelFilter) {
    let level = env::var("BATTLESHIP_SIM_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default_level);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
