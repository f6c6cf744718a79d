// Fallback screen source for targets without a Win32 desktop.
use super::error::{PlatformQueryError, Result as QueryResult};
use super::types::{ScreenPixelSource, ScreenPoint};

#[derive(Debug, Default)]
pub struct UnsupportedScreenPixelSource {}

impl UnsupportedScreenPixelSource {
    pub fn new() -> Self {
        UnsupportedScreenPixelSource {}
    }
}

impl ScreenPixelSource for UnsupportedScreenPixelSource {
    fn cursor_position(&self) -> QueryResult<ScreenPoint> {
        Err(PlatformQueryError::Unsupported)
    }

    fn read_pixel(&self, _point: ScreenPoint) -> QueryResult<u32> {
        Err(PlatformQueryError::Unsupported)
    }
}
