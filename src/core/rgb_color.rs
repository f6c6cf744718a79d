/*
 * Defines the platform-agnostic color value produced by a single screen sample.
 * Channels are kept as plain integers so that callers may hand in values
 * outside the 8-bit range; every encoder clamps them before formatting.
 */

// Lowest legal channel intensity.
pub const CHANNEL_MIN: i32 = 0;
// Highest legal channel intensity.
pub const CHANNEL_MAX: i32 = 255;

/*
 * Constrains a single channel value to the [0, 255] range.
 */
pub fn clamp_channel(value: i32) -> i32 {
    value.clamp(CHANNEL_MIN, CHANNEL_MAX)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor { r: 0, g: 0, b: 0 };

    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        RgbColor { r, g, b }
    }

    /*
     * Returns a copy of this color with every channel clamped to [0, 255].
     */
    pub fn clamped(self) -> Self {
        RgbColor {
            r: clamp_channel(self.r),
            g: clamp_channel(self.g),
            b: clamp_channel(self.b),
        }
    }

    // Channels in red, green, blue order.
    pub fn channels(self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    /*
     * Channels of the clamped color normalized to [0.0, 1.0].
     */
    pub fn normalized(self) -> [f64; 3] {
        let c = self.clamped();
        [
            f64::from(c.r) / 255.0,
            f64::from(c.g) / 255.0,
            f64::from(c.b) / 255.0,
        ]
    }

    pub fn is_achromatic(self) -> bool {
        let c = self.clamped();
        c.r == c.g && c.g == c.b
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        RgbColor::new(i32::from(r), i32::from(g), i32::from(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_channel_limits() {
        assert_eq!(clamp_channel(-20), 0);
        assert_eq!(clamp_channel(0), 0);
        assert_eq!(clamp_channel(128), 128);
        assert_eq!(clamp_channel(255), 255);
        assert_eq!(clamp_channel(1000), 255);
    }

    #[test]
    fn test_clamped_color_keeps_in_range_values() {
        let color = RgbColor::new(12, 200, 255);
        assert_eq!(color.clamped(), color);
    }

    #[test]
    fn test_clamped_color_fixes_out_of_range_values() {
        let color = RgbColor::new(-1, 300, 42);
        assert_eq!(color.clamped(), RgbColor::new(0, 255, 42));
    }

    #[test]
    fn test_normalized_uses_clamped_channels() {
        let [r, g, b] = RgbColor::new(510, 0, 51).normalized();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_achromatic_detection() {
        assert!(RgbColor::new(7, 7, 7).is_achromatic());
        assert!(RgbColor::new(300, 255, 999).is_achromatic());
        assert!(!RgbColor::new(7, 7, 8).is_achromatic());
    }

    #[test]
    fn test_from_u8_tuple() {
        assert_eq!(RgbColor::from((1u8, 2u8, 3u8)), RgbColor::new(1, 2, 3));
    }
}
