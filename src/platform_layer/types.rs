use super::error::Result as QueryResult;

/// A position in virtual-screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        ScreenPoint { x, y }
    }
}

// The raw screen primitives the pixel sampler is built on.
//
// The Win32 implementation talks to the live desktop; tests inject mocks so
// the sampling contract can be checked without a display.
pub trait ScreenPixelSource: Send + Sync {
    // Current pointer position.
    fn cursor_position(&self) -> QueryResult<ScreenPoint>;

    // Color at `point` as a Win32 COLORREF, laid out as 0x00BBGGRR.
    fn read_pixel(&self, point: ScreenPoint) -> QueryResult<u32>;
}
