//! Developer log
//!
//! The terminal belongs to the UI, so log records go to
//! `$TMPDIR/streetsearch.log`. Only initialised in debug builds.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

const LOG_FILE: &str = "streetsearch.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Start logging to the log file; level from `RUST_LOG`, default debug
pub fn init() {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(log_path()) else {
        return;
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("streetsearch=debug"),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    })
    .try_init();
}
