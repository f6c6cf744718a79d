/*
 * Converts a sampled `RgbColor` into the human-readable encodings offered to
 * the user: hexadecimal, RGB, CMYK, HSV and HSL. All functions here are pure;
 * the same input always yields the same strings. Every channel is clamped to
 * [0, 255] before any conversion, so the encoder is total over all inputs.
 *
 * Percentages and degrees are rounded half-to-even, and a hue that rounds up
 * to 360 degrees is reported as 0.
 */
use super::rgb_color::RgbColor;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Cmyk,
    Hsv,
    Hsl,
}

impl ColorFormat {
    // Display order of the suggestions.
    pub const ALL: [ColorFormat; 5] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Cmyk,
        ColorFormat::Hsv,
        ColorFormat::Hsl,
    ];

    /*
     * Short, stable identifier of the format. Used as the suggestion target so
     * that a host can tell the items apart.
     */
    pub fn tag(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Cmyk => "cmyk",
            ColorFormat::Hsv => "hsv",
            ColorFormat::Hsl => "hsl",
        }
    }

    pub fn action_label(self) -> &'static str {
        match self {
            ColorFormat::Hex => "Convert to hexadecimal",
            ColorFormat::Rgb => "Convert to RGB",
            ColorFormat::Cmyk => "Convert to CMYK",
            ColorFormat::Hsv => "Convert to HSV",
            ColorFormat::Hsl => "Convert to HSL",
        }
    }

    pub fn from_tag(tag: &str) -> Option<ColorFormat> {
        let wanted = tag.trim();
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.tag().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedColor {
    pub format: ColorFormat,
    pub text: String,
}

/*
 * Encodes the color in every supported format, in `ColorFormat::ALL` order.
 */
pub fn encode(rgb: RgbColor) -> Vec<EncodedColor> {
    ColorFormat::ALL
        .into_iter()
        .map(|format| EncodedColor {
            format,
            text: encode_as(rgb, format),
        })
        .collect()
}

pub fn encode_as(rgb: RgbColor, format: ColorFormat) -> String {
    let color = rgb.clamped();
    match format {
        ColorFormat::Hex => format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b),
        ColorFormat::Rgb => format!("{}, {}, {}", color.r, color.g, color.b),
        ColorFormat::Cmyk => {
            let [c, m, y, k] = rgb_to_cmyk(color);
            format!(
                "{}%, {}%, {}%, {}%",
                round_to_int(c),
                round_to_int(m),
                round_to_int(y),
                round_to_int(k)
            )
        }
        ColorFormat::Hsv => {
            let (h, s, v) = rgb_to_hsv(color);
            format!(
                "{}°, {}%, {}%",
                hue_degrees(h),
                round_to_int(s * 100.0),
                round_to_int(v * 100.0)
            )
        }
        ColorFormat::Hsl => {
            // The transform yields (h, l, s); the display order is h, s, l.
            let (h, l, s) = rgb_to_hls(color);
            format!(
                "{}°, {}%, {}%",
                hue_degrees(h),
                round_to_int(s * 100.0),
                round_to_int(l * 100.0)
            )
        }
    }
}

/*
 * Returns the CMYK components as percentages in [0, 100]. Pure black is a
 * special case, as the general formula would divide by zero.
 */
pub fn rgb_to_cmyk(rgb: RgbColor) -> [f64; 4] {
    let color = rgb.clamped();
    if color == RgbColor::BLACK {
        return [0.0, 0.0, 0.0, 100.0];
    }

    let [c, m, y] = color.channels().map(|channel| 1.0 - f64::from(channel) / 255.0);
    let k = c.min(m).min(y);
    let scale = |x: f64| (x - k) / (1.0 - k) * 100.0;
    [scale(c), scale(m), scale(y), k * 100.0]
}

/*
 * Standard RGB to HSV transform on channels normalized to [0, 1].
 * Returns (hue, saturation, value), each in [0, 1]; hue is 0 for gray.
 */
pub fn rgb_to_hsv(rgb: RgbColor) -> (f64, f64, f64) {
    let [r, g, b] = rgb.normalized();
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let v = max_c;
    if min_c == max_c {
        return (0.0, 0.0, v);
    }
    let range = max_c - min_c;
    let s = range / max_c;
    (hue_fraction(r, g, b, max_c, range), s, v)
}

/*
 * Standard RGB to HLS transform on channels normalized to [0, 1].
 * Returns (hue, lightness, saturation), each in [0, 1]; hue is 0 for gray.
 */
pub fn rgb_to_hls(rgb: RgbColor) -> (f64, f64, f64) {
    let [r, g, b] = rgb.normalized();
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let sum = max_c + min_c;
    let range = max_c - min_c;
    let l = sum / 2.0;
    if min_c == max_c {
        return (0.0, l, 0.0);
    }
    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - max_c - min_c)
    };
    (hue_fraction(r, g, b, max_c, range), l, s)
}

// Hue shared by HSV and HLS, as a fraction of a full turn. `range` must be non-zero.
fn hue_fraction(r: f64, g: f64, b: f64, max_c: f64, range: f64) -> f64 {
    let rc = (max_c - r) / range;
    let gc = (max_c - g) / range;
    let bc = (max_c - b) / range;
    let h = if r == max_c {
        bc - gc
    } else if g == max_c {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    (h / 6.0).rem_euclid(1.0)
}

fn round_to_int(value: f64) -> i64 {
    value.round_ties_even() as i64
}

fn hue_degrees(hue_fraction: f64) -> i64 {
    round_to_int(hue_fraction * 360.0) % 360
}
