/*
 * Resolves the per-user directories the plugin works with: the local
 * configuration directory (where the host-managed `settings.json` lives) and
 * the cache directory (where the preview icon is regenerated). Both are
 * derived from `directories::ProjectDirs` without an organization qualifier
 * and are created on first use.
 */
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn ensure_dir_exists(kind: &str, dir: &Path) -> Option<PathBuf> {
    if !dir.exists() {
        if let Err(e) = fs::create_dir_all(dir) {
            log::error!("PathUtils: Failed to create {kind} directory {dir:?}: {e}");
            return None;
        }
        log::debug!("PathUtils: Created {kind} directory: {dir:?}");
    } else {
        log::trace!("PathUtils: {kind} directory already exists: {dir:?}");
    }
    Some(dir.to_path_buf())
}

/*
 * Retrieves the application's local (non-roaming) configuration directory,
 * e.g. AppData/Local/<app>/config on Windows, creating it if necessary.
 * Returns `None` if no home directory can be determined or creation fails.
 */
pub fn get_base_app_config_local_dir(app_name: &str) -> Option<PathBuf> {
    log::trace!("PathUtils: Getting base app config local dir for '{app_name}'");
    ProjectDirs::from("", "", app_name)
        .and_then(|proj_dirs| ensure_dir_exists("config", proj_dirs.config_local_dir()))
}

/*
 * Retrieves the application's cache directory, creating it if necessary.
 */
pub fn get_base_app_cache_dir(app_name: &str) -> Option<PathBuf> {
    log::trace!("PathUtils: Getting base app cache dir for '{app_name}'");
    ProjectDirs::from("", "", app_name)
        .and_then(|proj_dirs| ensure_dir_exists("cache", proj_dirs.cache_dir()))
}
