/*
 * Samples the color of the screen pixel under the mouse pointer. The raw
 * queries come from a `ScreenPixelSource`; this module only sequences them
 * and decodes the Win32 COLORREF layout into an `RgbColor`.
 */
use super::error::Result as QueryResult;
use super::types::ScreenPixelSource;
use crate::core::RgbColor;

/*
 * Converts a Win32 COLORREF (0x00BBGGRR) into red, green, blue channels.
 * The high byte is ignored.
 */
pub fn colorref_to_color(colorref: u32) -> RgbColor {
    RgbColor::from((
        colorref as u8,
        (colorref >> 8) as u8,
        (colorref >> 16) as u8,
    ))
}

/*
 * Reads the pointer position, then the pixel at that position.
 * Any failure is returned as is; there is no retry.
 */
pub fn sample_cursor_pixel(source: &dyn ScreenPixelSource) -> QueryResult<RgbColor> {
    let point = source.cursor_position().inspect_err(|e| {
        log::warn!("PixelSampler: Could not read cursor position: {e}");
    })?;
    let colorref = source.read_pixel(point).inspect_err(|e| {
        log::warn!("PixelSampler: Could not read pixel at {point:?}: {e}");
    })?;
    let color = colorref_to_color(colorref);
    log::debug!("PixelSampler: Pixel at {point:?} is {color:?} (COLORREF {colorref:#010x})");
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform_layer::error::PlatformQueryError;
    use crate::platform_layer::types::ScreenPoint;
    use std::sync::Mutex;

    struct MockScreen {
        cursor: QueryResult<ScreenPoint>,
        pixel: QueryResult<u32>,
        read_points: Mutex<Vec<ScreenPoint>>,
    }

    impl MockScreen {
        fn new(cursor: QueryResult<ScreenPoint>, pixel: QueryResult<u32>) -> Self {
            MockScreen {
                cursor,
                pixel,
                read_points: Mutex::new(Vec::new()),
            }
        }
    }

    impl ScreenPixelSource for MockScreen {
        fn cursor_position(&self) -> QueryResult<ScreenPoint> {
            self.cursor.clone()
        }

        fn read_pixel(&self, point: ScreenPoint) -> QueryResult<u32> {
            self.read_points.lock().unwrap().push(point);
            self.pixel.clone()
        }
    }

    #[test]
    fn test_colorref_channels_are_reordered() {
        assert_eq!(colorref_to_color(0x00_00_00_ff), RgbColor::new(255, 0, 0));
        assert_eq!(colorref_to_color(0x00_00_ff_00), RgbColor::new(0, 255, 0));
        assert_eq!(colorref_to_color(0x00_ff_00_00), RgbColor::new(0, 0, 255));
        assert_eq!(colorref_to_color(0x00_56_34_12), RgbColor::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_colorref_high_byte_is_ignored() {
        assert_eq!(colorref_to_color(0xab_56_34_12), RgbColor::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_sample_reads_pixel_at_cursor() {
        let screen = MockScreen::new(Ok(ScreenPoint::new(640, 360)), Ok(0x00_30_20_10));

        let color = sample_cursor_pixel(&screen).unwrap();

        assert_eq!(color, RgbColor::new(0x10, 0x20, 0x30));
        assert_eq!(
            *screen.read_points.lock().unwrap(),
            vec![ScreenPoint::new(640, 360)]
        );
    }

    #[test]
    fn test_sample_supports_negative_coordinates() {
        // Monitors left of the primary display have negative x.
        let screen = MockScreen::new(Ok(ScreenPoint::new(-1200, 40)), Ok(0x00_ff_ff_ff));
        assert_eq!(
            sample_cursor_pixel(&screen).unwrap(),
            RgbColor::new(255, 255, 255)
        );
        assert_eq!(
            screen.read_points.lock().unwrap()[0],
            ScreenPoint::new(-1200, 40)
        );
    }

    #[test]
    fn test_cursor_failure_skips_pixel_read() {
        let screen = MockScreen::new(Err(PlatformQueryError::Unsupported), Ok(0));

        let result = sample_cursor_pixel(&screen);

        assert!(matches!(result, Err(PlatformQueryError::Unsupported)));
        assert!(screen.read_points.lock().unwrap().is_empty());
    }

    #[test]
    fn test_pixel_failure_is_propagated() {
        let screen = MockScreen::new(
            Ok(ScreenPoint::new(99999, 99999)),
            Err(PlatformQueryError::PixelUnavailable { x: 99999, y: 99999 }),
        );

        match sample_cursor_pixel(&screen) {
            Err(PlatformQueryError::PixelUnavailable { x, y }) => {
                assert_eq!((x, y), (99999, 99999));
            }
            other => panic!("Expected PixelUnavailable, got {other:?}"),
        }
    }
}
