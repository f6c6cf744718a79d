/*
 * Win32 implementation of `ScreenPixelSource`. The pointer position comes from
 * `GetCursorPos`; the pixel comes from `GetPixel` on the screen device
 * context. The device context is held by a guard that releases it on every
 * exit path.
 */
use super::error::{PlatformQueryError, Result as QueryResult};
use super::types::{ScreenPixelSource, ScreenPoint};

use windows::Win32::{
    Foundation::POINT,
    Graphics::Gdi::{GetDC, GetPixel, HDC, ReleaseDC},
    UI::WindowsAndMessaging::GetCursorPos,
};

// Returned by GetPixel when the point lies outside the clipping region.
const CLR_INVALID: u32 = 0xFFFF_FFFF;

// Device context for the whole virtual screen, released on drop.
struct ScreenDcGuard {
    hdc: HDC,
}

impl ScreenDcGuard {
    fn acquire() -> QueryResult<Self> {
        let hdc = unsafe { GetDC(None) };
        if hdc.is_invalid() {
            log::error!("ScreenWin32: Could not get screen DC.");
            return Err(PlatformQueryError::DeviceContextUnavailable);
        }
        Ok(ScreenDcGuard { hdc })
    }
}

impl Drop for ScreenDcGuard {
    fn drop(&mut self) {
        if unsafe { ReleaseDC(None, self.hdc) } == 0 {
            log::warn!("ScreenWin32: ReleaseDC reported the screen DC was not released.");
        }
    }
}

#[derive(Debug, Default)]
pub struct Win32ScreenPixelSource {}

impl Win32ScreenPixelSource {
    pub fn new() -> Self {
        Win32ScreenPixelSource {}
    }
}

impl ScreenPixelSource for Win32ScreenPixelSource {
    fn cursor_position(&self) -> QueryResult<ScreenPoint> {
        let mut point = POINT::default();
        unsafe { GetCursorPos(&mut point) }?;
        Ok(ScreenPoint::new(point.x, point.y))
    }

    fn read_pixel(&self, point: ScreenPoint) -> QueryResult<u32> {
        let screen_dc = ScreenDcGuard::acquire()?;
        let colorref = unsafe { GetPixel(screen_dc.hdc, point.x, point.y) };
        if colorref.0 == CLR_INVALID {
            return Err(PlatformQueryError::PixelUnavailable {
                x: point.x,
                y: point.y,
            });
        }
        Ok(colorref.0)
    }
}
