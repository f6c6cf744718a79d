/*
 * Platform access for reading live screen state. `pixel_sampler` holds the
 * platform-independent sampling sequence; the Win32 source is compiled on
 * Windows and a stub that reports `Unsupported` is compiled elsewhere.
 */
pub mod error;
pub mod pixel_sampler;
pub mod types;

#[cfg(target_os = "windows")]
pub mod screen_win32;
#[cfg(not(target_os = "windows"))]
pub mod screen_stub;

pub use error::{PlatformQueryError, Result as QueryResult};
pub use pixel_sampler::{colorref_to_color, sample_cursor_pixel};
pub use types::{ScreenPixelSource, ScreenPoint};

use std::sync::Arc;

/*
 * Returns the screen source for the current target.
 */
#[cfg(target_os = "windows")]
pub fn default_screen_source() -> Arc<dyn ScreenPixelSource> {
    Arc::new(screen_win32::Win32ScreenPixelSource::new())
}

#[cfg(not(target_os = "windows"))]
pub fn default_screen_source() -> Arc<dyn ScreenPixelSource> {
    Arc::new(screen_stub::UnsupportedScreenPixelSource::new())
}
