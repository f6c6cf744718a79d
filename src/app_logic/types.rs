/*
 * Types shared between the plugin logic and the launcher host: the items the
 * plugin publishes, the commands it queues for the host, icon handles, and the
 * `LauncherPlugin` capability trait the host drives.
 */
use std::fmt;
use std::path::PathBuf;

/// Opaque identifier for an icon loaded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u64);

/// Where the host should load an icon from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// A resource shipped inside the plugin package, e.g. `res://ColorPicker/colorpicker.ico`.
    PackageResource(String),
    /// A file written by the plugin into its cache directory.
    CacheFile(PathBuf),
}

impl fmt::Display for IconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSource::PackageResource(uri) => write!(f, "{uri}"),
            IconSource::CacheFile(path) => write!(f, "cache file {}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLoadError(pub String);

impl fmt::Display for IconLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Icon load failed: {}", self.0)
    }
}

impl std::error::Error for IconLoadError {}

// Icon management offered by the host.
//
// Every handle returned by `load_icon` must eventually be passed to
// `free_icon` exactly once.
pub trait IconStoreOperations: Send + Sync {
    // `force_reload` bypasses any host-side cache, for files that are rewritten in place.
    fn load_icon(
        &self,
        source: &IconSource,
        force_reload: bool,
    ) -> Result<IconHandle, IconLoadError>;
    fn free_icon(&self, handle: IconHandle);
}

/// The single keyword entry the plugin adds to the launcher catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub label: String,
    pub short_desc: String,
    pub target: String,
    pub icon: Option<IconHandle>,
}

/// One entry of the suggestion list, one per color format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub label: String,
    pub short_desc: String,
    /// Format tag, e.g. `"hex"`.
    pub target: String,
    pub icon: Option<IconHandle>,
    /// The encoded color string handed back on execute.
    pub payload: String,
}

/// Work the host performs on behalf of the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    SetCatalog(Vec<CatalogItem>),
    SetSuggestions(Vec<SuggestionItem>),
    SetClipboard(String),
}

// Callbacks invoked by the launcher host, one at a time, on its own thread.
//
// Handlers do not return results directly; they enqueue `HostCommand`s, which
// the host drains with `try_dequeue_command` after each call.
pub trait LauncherPlugin {
    fn on_start(&mut self);

    // The plugin's configuration file changed.
    fn on_config_changed(&mut self);

    fn on_populate_catalog(&mut self);

    // `items_chain_len` is the number of items the user has already selected
    // in the launcher box; zero means the plugin's item is not active.
    fn on_suggest(&mut self, user_input: &str, items_chain_len: usize);

    fn on_execute(&mut self, item: &SuggestionItem);

    // The launcher box was closed.
    fn on_deactivate(&mut self);

    // Called once before the host unloads the plugin.
    fn on_quit(&mut self) {}

    fn try_dequeue_command(&mut self) -> Option<HostCommand>;
}
