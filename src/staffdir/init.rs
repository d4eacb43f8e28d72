use crate::api::StaffApi;
use crate::commands::StaffPaths;
use crate::config::DirectoryConfig;
use crate::error::{Result, StaffError};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable naming the data directory.
pub const HOME_ENV: &str = "STAFFDIR_HOME";

pub struct StaffContext {
    pub api: StaffApi<FsBackend>,
    pub config: DirectoryConfig,
}

/// Pick the data directory: an explicit path wins, then `STAFFDIR_HOME`,
/// then the platform data directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>, env_home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit.or(env_home) {
        return Ok(dir);
    }
    let proj_dirs = ProjectDirs::from("com", "staffdir", "staffdir")
        .ok_or_else(|| StaffError::Storage("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Reads `STAFFDIR_HOME`, ignoring it when empty.
pub fn env_home() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn initialize(data_dir: PathBuf) -> StaffContext {
    debug!(data_dir = %data_dir.display(), "opening directory");

    let backend = FsBackend::new(data_dir.clone());
    let api = StaffApi::new(backend, StaffPaths { data_dir });
    let config = api.load_config();

    StaffContext { api, config }
}
