use std::fmt;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const DEFAULT_MAX_CHECKOUTS: usize = 5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

// ServeMode selects how the router is exposed
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum ServeMode {
    Http,
    Lambda,
}

impl TryFrom<&str> for ServeMode {
    type Error = LibraryError;

    fn try_from(s: &str) -> LibraryResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(ServeMode::Http),
            "lambda" => Ok(ServeMode::Lambda),
            other => Err(LibraryError::validation(
                format!("unknown serve mode {}", other).as_str(), None)),
        }
    }
}

impl Display for ServeMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ServeMode::Http => write!(f, "http"),
            ServeMode::Lambda => write!(f, "lambda"),
        }
    }
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_checkouts: usize,
    pub bind_addr: SocketAddr,
    pub serve_mode: ServeMode,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_checkouts: DEFAULT_MAX_CHECKOUTS,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            serve_mode: ServeMode::Http,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Builds configuration from a key lookup so overrides can be supplied without the process env.
    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let branch = lookup("LMS_BRANCH").unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Some(max) = lookup("LMS_MAX_CHECKOUTS") {
            config.max_checkouts = max.trim().parse::<usize>().map_err(|err| LibraryError::validation(
                format!("LMS_MAX_CHECKOUTS {} is not a valid limit: {}", max, err).as_str(), None))?;
        }
        let addr = lookup("LMS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        config.bind_addr = addr.trim().parse::<SocketAddr>().map_err(|err| LibraryError::validation(
            format!("LMS_BIND_ADDR {} is not a socket address: {}", addr, err).as_str(), None))?;
        if let Some(mode) = lookup("LMS_SERVE_MODE") {
            config.serve_mode = ServeMode::try_from(mode.trim())?;
        }
        Ok(config)
    }
}
