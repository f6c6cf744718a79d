/*
 * This module provides the plugin logic layer, centered around
 * `ColorPickerPlugin`, which implements the `LauncherPlugin` callbacks the
 * launcher host invokes. It turns a screen sample into suggestion items and
 * queues `HostCommand`s for the host to carry out.
 * Unit tests for `ColorPickerPlugin` are in `handler_tests.rs`.
 */
pub mod handler;
pub mod plugin_constants;
pub mod types;


pub use handler::{ColorPickerPlugin, build_suggestions};
pub use types::{
    CatalogItem, HostCommand, IconHandle, IconLoadError, IconSource, IconStoreOperations,
    LauncherPlugin, SuggestionItem,
};
