#[cfg(target_os = "windows")]
use windows::core::Error as WinError;

// Errors raised while querying live screen state.
//
// Any of these ends the current suggestion cycle: the plugin logs it and
// reports no suggestions. Nothing is retried.
#[derive(Debug, Clone)]
pub enum PlatformQueryError {
    /// An error originating from the Windows API, e.g. a failing `GetCursorPos`.
    #[cfg(target_os = "windows")]
    Win32(WinError),
    /// The screen device context could not be acquired.
    DeviceContextUnavailable,
    /// The coordinates do not resolve to a pixel on any display.
    PixelUnavailable { x: i32, y: i32 },
    /// Screen sampling is not implemented on this platform.
    Unsupported,
}

#[cfg(target_os = "windows")]
impl From<WinError> for PlatformQueryError {
    fn from(err: WinError) -> Self {
        PlatformQueryError::Win32(err)
    }
}

impl std::fmt::Display for PlatformQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(target_os = "windows")]
            PlatformQueryError::Win32(e) => write!(f, "Win32 Error: {}", e),
            PlatformQueryError::DeviceContextUnavailable => {
                write!(f, "Screen Device Context Unavailable")
            }
            PlatformQueryError::PixelUnavailable { x, y } => {
                write!(f, "No Pixel At ({}, {})", x, y)
            }
            PlatformQueryError::Unsupported => write!(f, "Screen Sampling Unsupported"),
        }
    }
}

impl std::error::Error for PlatformQueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(target_os = "windows")]
            PlatformQueryError::Win32(e) => Some(e),
            _ => None,
        }
    }
}

/// A specialized `Result` type for screen queries.
pub type Result<T> = std::result::Result<T, PlatformQueryError>;
