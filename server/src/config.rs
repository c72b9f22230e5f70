use std::path::{Path, PathBuf};

use clap::Parser;

pub const HOST: &str = "localhost";
pub const PORT: u16 = 4221;

/// The most bytes read from a connection. A request longer than this is truncated.
pub const READ_BUFFER_SIZE: usize = 2048;

pub const DEFAULT_DIRECTORY: &str = "files";
pub const STATIC_DIRECTORY: &str = "static";

/// Command-line arguments of the `http_server` binary.
#[derive(Parser, Debug)]
#[command(name = "http_server", about = "http server")]
pub struct Cli {
    /// Directory served and written by the /files route
    #[arg(short, long, default_value = DEFAULT_DIRECTORY)]
    pub directory: PathBuf,
}

/// Everything a `Server` needs to know to answer requests.
#[derive(Clone, PartialEq, Debug)]
pub struct Config {
    /// The address the listener binds to, e.g. `localhost:4221`.
    pub address: String,
    /// Root of the storage used by `GET /files` and `POST /files`.
    pub files: PathBuf,
    /// Root of the `.html` pages served by `GET /`.
    pub assets: PathBuf,
}

impl Config {
    pub fn new<F: Into<PathBuf>, A: Into<PathBuf>>(files: F, assets: A) -> Config {
        Config {
            address: format!("{}:{}", HOST, PORT),
            files: files.into(),
            assets: assets.into(),
        }
    }

    /// Builds a `Config` from the command line.
    ///
    /// A relative `--directory` is resolved against the directory of this crate, not the working
    /// directory of the process. The static assets always live next to it, in `static/`.
    pub fn from_cli(cli: &Cli) -> Config {
        Self::resolve(Path::new(env!("CARGO_MANIFEST_DIR")), &cli.directory)
    }

    fn resolve(base: &Path, directory: &Path) -> Config {
        // joining an absolute path replaces `base` entirely
        Config::new(base.join(directory), base.join(STATIC_DIRECTORY))
    }

    pub fn with_address<S: Into<String>>(mut self, address: S) -> Config {
        self.address = address.into();
        self
    }

    /// Creates the file storage directory if it does not exist yet.
    pub fn prepare(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.files)
    }
}
