use std::path::PathBuf;

/// Address the server binds to; fixed, not configurable.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4221";

/// Server configuration, fixed at startup and shared read-only across
/// connection tasks.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Filesystem root for the /files/* routes.
    pub directory: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// Parses `--directory <path>` from the process arguments; any
    /// other argument is ignored. The serving directory defaults to
    /// the current directory.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut directory = PathBuf::from(".");

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--directory" {
                if let Some(path) = args.next() {
                    directory = PathBuf::from(path);
                }
            }
        }

        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            directory,
        }
    }
}
