// src/main.rs
//
// A minimal console stand-in for the launcher host. It drives one complete
// plugin lifecycle and prints what a real host would display, ending with the
// string that would be placed on the clipboard.
//
// Usage: color_picker [hex|rgb|cmyk|hsv|hsl]

use color_picker::app_logic::plugin_constants::APP_NAME;
use color_picker::app_logic::{
    CatalogItem, ColorPickerPlugin, HostCommand, IconHandle, IconLoadError, IconSource,
    IconStoreOperations, LauncherPlugin, SuggestionItem,
};
use color_picker::core::{ColorFormat, CoreSettingsManager, path_utils};
use color_picker::platform_layer::default_screen_source;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::collections::HashSet;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

const LOG_LEVEL_ENV: &str = "COLOR_PICKER_LOG";

// Hands out icon handles and tracks which ones are still alive.
struct ConsoleIconStore {
    next_handle: Mutex<u64>,
    live: Mutex<HashSet<IconHandle>>,
}

impl ConsoleIconStore {
    fn new() -> Self {
        ConsoleIconStore {
            next_handle: Mutex::new(1),
            live: Mutex::new(HashSet::new()),
        }
    }

    fn live_count(&self) -> usize {
        self.live.lock().map(|live| live.len()).unwrap_or(0)
    }
}

impl IconStoreOperations for ConsoleIconStore {
    fn load_icon(
        &self,
        source: &IconSource,
        force_reload: bool,
    ) -> Result<IconHandle, IconLoadError> {
        if let IconSource::CacheFile(path) = source {
            if !path.is_file() {
                return Err(IconLoadError(format!("{} does not exist", path.display())));
            }
        }
        let mut next = self
            .next_handle
            .lock()
            .map_err(|_| IconLoadError("icon store lock poisoned".to_string()))?;
        let handle = IconHandle(*next);
        *next += 1;
        if let Ok(mut live) = self.live.lock() {
            live.insert(handle);
        }
        log::debug!("Host: Loaded icon {source} as {handle:?} (force_reload: {force_reload})");
        Ok(handle)
    }

    fn free_icon(&self, handle: IconHandle) {
        let was_live = self
            .live
            .lock()
            .map(|mut live| live.remove(&handle))
            .unwrap_or(false);
        if !was_live {
            log::warn!("Host: Freed unknown icon {handle:?}");
        }
    }
}

#[derive(Default)]
struct HostOutcome {
    catalog: Vec<CatalogItem>,
    suggestions: Vec<SuggestionItem>,
    clipboard: Option<String>,
}

fn process_commands(plugin: &mut dyn LauncherPlugin, outcome: &mut HostOutcome) {
    while let Some(command) = plugin.try_dequeue_command() {
        match command {
            HostCommand::SetCatalog(items) => outcome.catalog = items,
            HostCommand::SetSuggestions(items) => outcome.suggestions = items,
            HostCommand::SetClipboard(text) => outcome.clipboard = Some(text),
        }
    }
}

fn init_logging() {
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {e}");
    }
}

fn main() -> ExitCode {
    init_logging();

    let wanted = std::env::args().nth(1).unwrap_or_else(|| "hex".to_string());
    let Some(format) = ColorFormat::from_tag(&wanted) else {
        eprintln!("Unknown color format '{wanted}'. Use one of: hex, rgb, cmyk, hsv, hsl.");
        return ExitCode::FAILURE;
    };

    let icon_store = Arc::new(ConsoleIconStore::new());
    let mut plugin = ColorPickerPlugin::new(
        Arc::new(CoreSettingsManager::new()),
        default_screen_source(),
        icon_store.clone(),
        path_utils::get_base_app_cache_dir(APP_NAME),
    );
    let mut outcome = HostOutcome::default();

    plugin.on_start();
    plugin.on_populate_catalog();
    process_commands(&mut plugin, &mut outcome);
    for item in &outcome.catalog {
        println!("{} ({})", item.label, item.short_desc);
    }

    plugin.on_suggest("", 1);
    process_commands(&mut plugin, &mut outcome);
    for item in &outcome.suggestions {
        println!("  {:<24} {}", item.label, item.short_desc);
    }

    let selected = outcome
        .suggestions
        .iter()
        .find(|item| item.target == format.tag())
        .cloned();
    let exit_code = match selected {
        Some(item) => {
            plugin.on_execute(&item);
            process_commands(&mut plugin, &mut outcome);
            if let Some(text) = &outcome.clipboard {
                println!("{text}");
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No color could be sampled.");
            ExitCode::FAILURE
        }
    };

    plugin.on_deactivate();
    plugin.on_quit();
    let leaked = icon_store.live_count();
    if leaked > 0 {
        log::warn!("Host: {leaked} icon(s) were not released by the plugin.");
    }
    exit_code
}
