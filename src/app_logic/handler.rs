use crate::app_logic::plugin_constants::{
    APP_NAME, CATALOG_ITEM_SHORT_DESC, CATALOG_ITEM_TARGET, ITEM_ICON_RESOURCE,
    suggestion_short_desc,
};
use crate::app_logic::types::{
    CatalogItem, HostCommand, IconHandle, IconSource, IconStoreOperations, LauncherPlugin,
    SuggestionItem,
};
use crate::core::{self, DEFAULT_ITEM_LABEL, RgbColor, SettingsManagerOperations};
use crate::platform_layer::{ScreenPixelSource, sample_cursor_pixel};

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

/*
 * Builds the suggestion list for a sampled color: one item per color format,
 * in display order, each carrying its encoded string as payload.
 */
pub fn build_suggestions(rgb: RgbColor, icon: Option<IconHandle>) -> Vec<SuggestionItem> {
    core::encode(rgb)
        .into_iter()
        .map(|encoded| SuggestionItem {
            label: encoded.format.action_label().to_string(),
            short_desc: suggestion_short_desc(&encoded.text),
            target: encoded.format.tag().to_string(),
            icon,
            payload: encoded.text,
        })
        .collect()
}

/*
 * The color picker plugin. It owns all state that lives between host
 * callbacks: the configured catalog label, the icon handles it has loaded,
 * and the queue of commands waiting for the host. Collaborators are injected
 * as traits so the logic can be driven by tests without a screen or a host.
 *
 * Icon handles are released deterministically: the preview icon on every
 * deactivation and before it is replaced, both icons on quit or drop.
 */
pub struct ColorPickerPlugin {
    pub(crate) item_label: String,
    pub(crate) item_icon: Option<IconHandle>,
    pub(crate) preview_icon: Option<IconHandle>,
    pub(crate) cache_dir: Option<PathBuf>,
    command_queue: VecDeque<HostCommand>,
    settings_manager: Arc<dyn SettingsManagerOperations>,
    screen_source: Arc<dyn ScreenPixelSource>,
    icon_store: Arc<dyn IconStoreOperations>,
}

impl ColorPickerPlugin {
    /*
     * `cache_dir` is where the preview icon is written. Without it the
     * suggestions are still produced, just without a preview icon.
     */
    pub fn new(
        settings_manager: Arc<dyn SettingsManagerOperations>,
        screen_source: Arc<dyn ScreenPixelSource>,
        icon_store: Arc<dyn IconStoreOperations>,
        cache_dir: Option<PathBuf>,
    ) -> Self {
        ColorPickerPlugin {
            item_label: DEFAULT_ITEM_LABEL.to_string(),
            item_icon: None,
            preview_icon: None,
            cache_dir,
            command_queue: VecDeque::new(),
            settings_manager,
            screen_source,
            icon_store,
        }
    }

    pub fn item_label(&self) -> &str {
        &self.item_label
    }

    fn enqueue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    fn read_config(&mut self) {
        match self.settings_manager.load_settings(APP_NAME) {
            Ok(settings) => {
                log::debug!(
                    "ColorPickerPlugin: Using item label '{}'.",
                    settings.item_label
                );
                self.item_label = settings.item_label;
            }
            Err(e) => {
                log::warn!(
                    "ColorPickerPlugin: Could not load settings ({e}), using default item label."
                );
                self.item_label = DEFAULT_ITEM_LABEL.to_string();
            }
        }
    }

    fn free_icon_slot(icon_store: &dyn IconStoreOperations, slot: &mut Option<IconHandle>) {
        if let Some(handle) = slot.take() {
            log::trace!("ColorPickerPlugin: Freeing icon {handle:?}");
            icon_store.free_icon(handle);
        }
    }

    /*
     * Releases the preview icon, and with `full` also the catalog item icon.
     * Safe to call repeatedly; each handle is freed at most once.
     */
    fn cleanup(&mut self, full: bool) {
        if full {
            Self::free_icon_slot(self.icon_store.as_ref(), &mut self.item_icon);
        }
        Self::free_icon_slot(self.icon_store.as_ref(), &mut self.preview_icon);
    }

    /*
     * Writes the preview icon for `rgb` and loads it through the host. The
     * previous preview handle is always released first. Failures only cost
     * the suggestions their icon.
     */
    fn refresh_preview_icon(&mut self, rgb: RgbColor) {
        Self::free_icon_slot(self.icon_store.as_ref(), &mut self.preview_icon);

        let Some(cache_dir) = self.cache_dir.as_deref() else {
            log::warn!("ColorPickerPlugin: No cache directory, skipping preview icon.");
            return;
        };
        let icon_path = match core::write_preview_icon(cache_dir, rgb) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("ColorPickerPlugin: Failed to write preview icon: {e}");
                return;
            }
        };
        match self
            .icon_store
            .load_icon(&IconSource::CacheFile(icon_path), true)
        {
            Ok(handle) => self.preview_icon = Some(handle),
            Err(e) => log::warn!("ColorPickerPlugin: Failed to load preview icon: {e}"),
        }
    }
}

impl LauncherPlugin for ColorPickerPlugin {
    fn on_start(&mut self) {
        log::debug!("ColorPickerPlugin: Starting.");
        self.read_config();

        let source = IconSource::PackageResource(ITEM_ICON_RESOURCE.to_string());
        match self.icon_store.load_icon(&source, false) {
            Ok(handle) => {
                Self::free_icon_slot(self.icon_store.as_ref(), &mut self.item_icon);
                self.item_icon = Some(handle);
            }
            Err(e) => log::warn!("ColorPickerPlugin: Failed to load item icon {source}: {e}"),
        }
    }

    fn on_config_changed(&mut self) {
        log::debug!("ColorPickerPlugin: Configuration changed, reloading settings.");
        self.read_config();
    }

    fn on_populate_catalog(&mut self) {
        let item = CatalogItem {
            label: self.item_label.clone(),
            short_desc: CATALOG_ITEM_SHORT_DESC.to_string(),
            target: CATALOG_ITEM_TARGET.to_string(),
            icon: self.item_icon,
        };
        self.enqueue_command(HostCommand::SetCatalog(vec![item]));
    }

    fn on_suggest(&mut self, user_input: &str, items_chain_len: usize) {
        if items_chain_len == 0 {
            log::trace!(
                "ColorPickerPlugin: Ignoring suggest for input '{user_input}' outside our item."
            );
            return;
        }

        let rgb = match sample_cursor_pixel(self.screen_source.as_ref()) {
            Ok(rgb) => rgb,
            Err(e) => {
                log::error!("ColorPickerPlugin: Could not sample screen pixel: {e}");
                self.enqueue_command(HostCommand::SetSuggestions(Vec::new()));
                return;
            }
        };

        self.refresh_preview_icon(rgb);
        let suggestions = build_suggestions(rgb, self.preview_icon);
        log::debug!(
            "ColorPickerPlugin: Offering {} encodings of {rgb:?}.",
            suggestions.len()
        );
        self.enqueue_command(HostCommand::SetSuggestions(suggestions));
    }

    fn on_execute(&mut self, item: &SuggestionItem) {
        log::debug!(
            "ColorPickerPlugin: Copying {} value '{}' to clipboard.",
            item.target,
            item.payload
        );
        self.enqueue_command(HostCommand::SetClipboard(item.payload.clone()));
    }

    fn on_deactivate(&mut self) {
        self.cleanup(false);
    }

    fn on_quit(&mut self) {
        log::debug!("ColorPickerPlugin: Quitting, releasing icons.");
        self.cleanup(true);
    }

    fn try_dequeue_command(&mut self) -> Option<HostCommand> {
        self.command_queue.pop_front()
    }
}

impl Drop for ColorPickerPlugin {
    fn drop(&mut self) {
        self.cleanup(true);
    }
}
