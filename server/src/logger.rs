use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use env_logger::{Env, Target};
use log::{warn, Level};

pub const LOG_FILE: &str = "http_server.log";

/// The log file, kept next to this crate.
pub fn default_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(LOG_FILE)
}

/// Appends `[timestamp] LEVEL: message` lines to the file at `path`, from `debug` up unless
/// `RUST_LOG` says otherwise.
///
/// If the file cannot be opened, logs go to stderr instead.
pub fn init(path: &Path) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("debug"));
    builder.format(|buf, record| writeln!(buf, "{}", line(Local::now(), record.level(), record.args())));

    let opened = open(path).map(|file| {
        builder.target(Target::Pipe(Box::new(file)));
    });

    builder.init();

    if let Err(e) = opened {
        warn!("[logger::init] cannot open {}, logging to stderr: {}", path.display(), e);
    }
}

fn open(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn line(now: DateTime<Local>, level: Level, message: impl Display) -> String {
    format!("[{}] {}: {}", now.format("%Y-%m-%d %H:%M:%S,%3f"), level, message)
}
