use std::env;
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Metadata, Record};

/// Writes records to stderr, stamped with the time since [`init_logging`].
struct StderrLogger {
    started: OnceLock<Instant>,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.get_or_init(Instant::now).elapsed();
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "{:>8.3}s {:<5} {}: {}",
            elapsed.as_secs_f64(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger {
    started: OnceLock::new(),
};

/// Level requested through `GRIDBATTLE_LOG` (`off`, `error` .. `trace`).
fn level_from_env() -> LevelFilter {
    env::var("GRIDBATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. Defaults to `info` when `GRIDBATTLE_LOG` is
/// unset or unparsable. Boards and prompts go to stdout, so the two streams
/// never interleave. Calling it twice is harmless.
pub fn init_logging() {
    let level = level_from_env();
    if log::set_logger(&LOGGER).is_ok() {
        let _ = LOGGER.started.set(Instant::now());
        log::set_max_level(level);
    }
}
