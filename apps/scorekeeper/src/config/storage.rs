use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

pub const DATA_DIR_VAR: &str = "SCOREKEEPER_DATA_DIR";
pub const STORE_VAR: &str = "SCOREKEEPER_STORE";

/// File name of the key-value document inside the data directory.
pub const STORE_FILE_NAME: &str = "store.json";

/// Backing store for saved settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// JSON document on disk
    File,
    /// Process-local map; nothing survives exit
    Memory,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreKind::File),
            "memory" => Ok(StoreKind::Memory),
            other => Err(AppError::config(format!(
                "{STORE_VAR} must be 'file' or 'memory', but got: '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub kind: StoreKind,
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Builds the storage configuration from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the storage configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = match lookup(STORE_VAR) {
            Some(raw) => raw.parse()?,
            None => StoreKind::File,
        };
        let data_dir = data_dir(&lookup)?;
        Ok(Self { kind, data_dir })
    }

    /// In-memory store; the data dir is never touched.
    pub fn memory() -> Self {
        Self {
            kind: StoreKind::Memory,
            data_dir: PathBuf::new(),
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }
}

/// Data directory: explicit override, else `$HOME/.scorekeeper`
fn data_dir<F>(lookup: &F) -> Result<PathBuf, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = lookup("HOME").filter(|h| !h.trim().is_empty()).ok_or_else(|| {
        AppError::config(format!(
            "Neither '{DATA_DIR_VAR}' nor 'HOME' is set; cannot locate the data directory"
        ))
    })?;
    Ok(PathBuf::from(home).join(".scorekeeper"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_to_file_store_under_home() {
        let config = StorageConfig::from_lookup(lookup(&[("HOME", "/home/anne")])).unwrap();
        assert_eq!(config.kind, StoreKind::File);
        assert_eq!(config.data_dir, PathBuf::from("/home/anne/.scorekeeper"));
        assert_eq!(
            config.store_path(),
            PathBuf::from("/home/anne/.scorekeeper/store.json")
        );
    }

    #[test]
    fn data_dir_override_wins() {
        let config = StorageConfig::from_lookup(lookup(&[
            ("HOME", "/home/anne"),
            (DATA_DIR_VAR, "/tmp/sk"),
            (STORE_VAR, "Memory"),
        ]))
        .unwrap();
        assert_eq!(config.kind, StoreKind::Memory);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/sk"));
    }

    #[test]
    fn unknown_store_kind_is_config_error() {
        let err = StorageConfig::from_lookup(lookup(&[("HOME", "/h"), (STORE_VAR, "redis")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
        assert!(err.to_string().contains("redis"));
    }

    #[test]
    fn missing_home_and_dir_is_config_error() {
        let err = StorageConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
