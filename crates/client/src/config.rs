//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings the host supplies around the bundled rules.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml` and the RON catalog.
    pub data_dir: PathBuf,
    /// Overrides the seed from `config.toml`.
    pub seed: Option<u64>,
    /// Stop after this many days instead of playing until input runs out.
    pub max_days: Option<u32>,
    /// Directory for the rolling log file (default: platform data directory).
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: None,
            max_days: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COURT_DATA_DIR` - Content directory (default: `data`)
    /// - `COURT_SEED` - RNG seed (default: `seed` in `config.toml`, else random)
    /// - `COURT_MAX_DAYS` - Days to play before exiting (default: unlimited)
    /// - `COURT_LOG_DIR` - Log directory (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("COURT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.seed = read_env::<u64>("COURT_SEED");
        config.max_days = read_env::<u32>("COURT_MAX_DAYS").filter(|days| *days > 0);
        config.log_dir = env::var("COURT_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    /// Environment seed first, then the file seed, then a fresh random one.
    pub fn resolve_seed(&self, file_seed: Option<u64>) -> u64 {
        self.seed.or(file_seed).unwrap_or_else(rand::random)
    }

    /// Whether the game should stop before playing `day`.
    pub fn past_last_day(&self, day: u32) -> bool {
        self.max_days.is_some_and(|max| day > max)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
