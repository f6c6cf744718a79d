/*
 * Fixed names and strings the plugin presents to the launcher host.
 */

// Name used for the per-user config and cache directories.
pub const APP_NAME: &str = "ColorPicker";

// Icon shown next to the catalog item.
pub const ITEM_ICON_RESOURCE: &str = "res://ColorPicker/colorpicker.ico";

pub const CATALOG_ITEM_SHORT_DESC: &str = "Pick a color from the screen";

// Target of the catalog item; suggestions use the color format tag instead.
pub const CATALOG_ITEM_TARGET: &str = "picker";

pub fn suggestion_short_desc(color_code: &str) -> String {
    format!("Copy {color_code} to clipboard")
}
