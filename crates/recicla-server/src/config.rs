// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address, host:port.
    pub bind: String,
    /// SQLite database file. Created on first start.
    pub db_path: PathBuf,
    /// Process-wide secret signing the one-shot flash cookie.
    pub flash_secret: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            db_path: PathBuf::from("pontos.db"),
            flash_secret: "troque-esta-chave-secreta".to_string(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind: env_string("RECICLA_BIND", &defaults.bind),
            db_path: PathBuf::from(env_string(
                "RECICLA_DB_PATH",
                &defaults.db_path.to_string_lossy(),
            )),
            flash_secret: env_string("RECICLA_FLASH_SECRET", &defaults.flash_secret),
        }
    }
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_local_and_relative() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind, "127.0.0.1:8000");
        assert_eq!(cfg.db_path, PathBuf::from("pontos.db"));
        assert!(!cfg.flash_secret.is_empty());
    }
}
