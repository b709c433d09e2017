use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::solvers::SymphonyCommand;

const DEFAULT_PORT: u16 = 9000;
const DEFAULT_JSON_LIMIT: usize = 2 * 1024 * 1024; // 2 MB
const DEFAULT_SOLVER: &str = "symphony";
const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(128) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Where and how the SYMPHONY binary is run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub solver_path: PathBuf,
    pub parameters_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub timeout: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            solver_path: PathBuf::from(DEFAULT_SOLVER),
            parameters_path: None,
            output_dir: env::temp_dir(),
            timeout: None,
        }
    }
}

impl SolverConfig {
    /// Read `SYMPHONY_PATH`, `SYMPHONY_PARAMETERS`, `OUTPUT_DIR` and `SOLVER_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let defaults = SolverConfig::default();
        SolverConfig {
            solver_path: env_path("SYMPHONY_PATH").unwrap_or(defaults.solver_path),
            parameters_path: env_path("SYMPHONY_PARAMETERS"),
            output_dir: env_path("OUTPUT_DIR").unwrap_or(defaults.output_dir),
            timeout: env_parse::<u64>("SOLVER_TIMEOUT_SECS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    pub fn command(&self) -> SymphonyCommand {
        let command = SymphonyCommand::new(&self.solver_path);
        match self.timeout {
            Some(timeout) => command.with_timeout(timeout),
            None => command,
        }
    }
}

/// HTTP service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub json_limit: usize,
    pub cache_capacity: NonZeroUsize,
    pub solver: SolverConfig,
}

impl ServiceConfig {
    /// Read `PORT`, `JSON_PAYLOAD_LIMIT` and `CACHE_CAPACITY` plus the solver settings.
    /// Missing or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        ServiceConfig {
            port: env_parse("PORT").unwrap_or(DEFAULT_PORT),
            json_limit: env_parse("JSON_PAYLOAD_LIMIT").unwrap_or(DEFAULT_JSON_LIMIT),
            cache_capacity: env_parse("CACHE_CAPACITY")
                .and_then(NonZeroUsize::new)
                .unwrap_or(DEFAULT_CACHE_CAPACITY),
            solver: SolverConfig::from_env(),
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
