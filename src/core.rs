/*
 * This module consolidates the core, platform-agnostic logic of the plugin:
 * the color value model, the color encoders, the preview icon builder, and
 * the settings and directory helpers. Nothing here touches the screen or any
 * Win32 API, so all of it is unit tested on every target.
 */
pub mod color_encoder;
pub mod config;
pub mod path_utils;
pub mod preview_icon;
pub mod rgb_color;

pub use color_encoder::{ColorFormat, EncodedColor, encode, encode_as};

pub use config::{
    ConfigError, CoreSettingsManager, DEFAULT_ITEM_LABEL, PluginSettings,
    SettingsManagerOperations,
};

pub use preview_icon::{build_preview_icon, write_preview_icon};

pub use rgb_color::{RgbColor, clamp_channel};
