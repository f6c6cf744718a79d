/*
 * Builds the small preview icon shown next to each suggestion. The icon is a
 * single-image `.ico` container holding one 16x16, 32 bits-per-pixel,
 * uncompressed bitmap where every pixel is the sampled color, followed by an
 * all-zero AND mask. The file is regenerated on every suggestion cycle and
 * written to the plugin's cache directory.
 */
use super::rgb_color::RgbColor;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const PREVIEW_ICON_FILENAME: &str = "preview.ico";

pub const ICON_SIZE: usize = 16;
const BITS_PER_PIXEL: u16 = 32;
const ICON_DIR_LEN: usize = 6;
const ICON_DIR_ENTRY_LEN: usize = 16;
const BITMAP_INFO_HEADER_LEN: usize = 40;
const PIXEL_DATA_LEN: usize = ICON_SIZE * ICON_SIZE * 4;
// One bit per pixel, rows padded to 32 bits.
const AND_MASK_LEN: usize = ICON_SIZE * 4;
const IMAGE_DATA_LEN: usize = BITMAP_INFO_HEADER_LEN + PIXEL_DATA_LEN + AND_MASK_LEN;
const IMAGE_OFFSET: usize = ICON_DIR_LEN + ICON_DIR_ENTRY_LEN;
// 72 DPI expressed in pixels per meter.
const PIXELS_PER_METER: u32 = 0x0b13;

pub const PREVIEW_ICON_LEN: usize = IMAGE_OFFSET + IMAGE_DATA_LEN;

/*
 * Produces the complete `.ico` file contents for the given color.
 * Out-of-range channels are clamped first.
 */
pub fn build_preview_icon(rgb: RgbColor) -> Vec<u8> {
    let color = rgb.clamped();
    let mut bytes = Vec::with_capacity(PREVIEW_ICON_LEN);

    // ICONDIR
    bytes.extend_from_slice(&0u16.to_le_bytes()); // reserved
    bytes.extend_from_slice(&1u16.to_le_bytes()); // type: icon
    bytes.extend_from_slice(&1u16.to_le_bytes()); // image count

    // ICONDIRENTRY
    bytes.push(ICON_SIZE as u8); // width
    bytes.push(ICON_SIZE as u8); // height
    bytes.push(0); // palette size
    bytes.push(0); // reserved
    bytes.extend_from_slice(&1u16.to_le_bytes()); // color planes
    bytes.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    bytes.extend_from_slice(&(IMAGE_DATA_LEN as u32).to_le_bytes());
    bytes.extend_from_slice(&(IMAGE_OFFSET as u32).to_le_bytes());

    // BITMAPINFOHEADER. The height covers both the color bitmap and the mask.
    bytes.extend_from_slice(&(BITMAP_INFO_HEADER_LEN as u32).to_le_bytes());
    bytes.extend_from_slice(&(ICON_SIZE as i32).to_le_bytes());
    bytes.extend_from_slice(&((ICON_SIZE * 2) as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // planes
    bytes.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    bytes.extend_from_slice(&(PIXEL_DATA_LEN as u32).to_le_bytes());
    bytes.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    bytes.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes()); // colors used
    bytes.extend_from_slice(&0u32.to_le_bytes()); // important colors

    let pixel = [color.b as u8, color.g as u8, color.r as u8, 0xff];
    for _ in 0..ICON_SIZE * ICON_SIZE {
        bytes.extend_from_slice(&pixel);
    }

    bytes.resize(PREVIEW_ICON_LEN, 0);
    bytes
}

/*
 * Writes the preview icon for `rgb` into `cache_dir`, creating the directory if
 * needed and replacing any earlier preview. Returns the path of the written file.
 */
pub fn write_preview_icon(cache_dir: &Path, rgb: RgbColor) -> io::Result<PathBuf> {
    if !cache_dir.exists() {
        fs::create_dir_all(cache_dir)?;
        log::debug!("PreviewIcon: Created cache directory {cache_dir:?}");
    }
    let icon_path = cache_dir.join(PREVIEW_ICON_FILENAME);
    fs::write(&icon_path, build_preview_icon(rgb))?;
    log::trace!("PreviewIcon: Wrote preview for {rgb:?} to {icon_path:?}");
    Ok(icon_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_preview_icon_has_expected_length() {
        let bytes = build_preview_icon(RgbColor::new(1, 2, 3));
        assert_eq!(bytes.len(), 1150);
        assert_eq!(bytes.len(), PREVIEW_ICON_LEN);
    }

    #[test]
    fn test_preview_icon_headers() {
        let bytes = build_preview_icon(RgbColor::new(10, 20, 30));

        // ICONDIR
        assert_eq!(u16_at(&bytes, 0), 0);
        assert_eq!(u16_at(&bytes, 2), 1);
        assert_eq!(u16_at(&bytes, 4), 1);
        // ICONDIRENTRY
        assert_eq!(&bytes[6..10], &[16, 16, 0, 0]);
        assert_eq!(u16_at(&bytes, 10), 1);
        assert_eq!(u16_at(&bytes, 12), 32);
        assert_eq!(u32_at(&bytes, 14), 0x468);
        assert_eq!(u32_at(&bytes, 18), 22);
        // BITMAPINFOHEADER
        assert_eq!(u32_at(&bytes, 22), 40);
        assert_eq!(u32_at(&bytes, 26), 16);
        assert_eq!(u32_at(&bytes, 30), 32);
        assert_eq!(u16_at(&bytes, 34), 1);
        assert_eq!(u16_at(&bytes, 36), 32);
        assert_eq!(u32_at(&bytes, 38), 0);
        assert_eq!(u32_at(&bytes, 42), 0x400);
        assert_eq!(u32_at(&bytes, 46), 0x0b13);
        assert_eq!(u32_at(&bytes, 50), 0x0b13);
        assert_eq!(u32_at(&bytes, 54), 0);
        assert_eq!(u32_at(&bytes, 58), 0);
    }

    #[test]
    fn test_every_pixel_is_the_sampled_color_in_bgra_order() {
        let bytes = build_preview_icon(RgbColor::new(0x12, 0x34, 0x56));
        let pixels = &bytes[62..62 + 1024];
        for pixel in pixels.chunks_exact(4) {
            assert_eq!(pixel, &[0x56, 0x34, 0x12, 0xff]);
        }
        assert!(bytes[62 + 1024..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_preview_icon_clamps_channels() {
        let bytes = build_preview_icon(RgbColor::new(-5, 300, 128));
        assert_eq!(&bytes[62..66], &[128, 255, 0, 0xff]);
    }

    #[test]
    fn test_write_preview_icon_creates_dir_and_overwrites() {
        let dir = tempdir().unwrap();
        let cache_dir = dir.path().join("nested").join("cache");

        let first = write_preview_icon(&cache_dir, RgbColor::new(255, 0, 0)).unwrap();
        assert_eq!(first, cache_dir.join(PREVIEW_ICON_FILENAME));
        assert_eq!(fs::read(&first).unwrap()[62..65], [0, 0, 255]);

        let second = write_preview_icon(&cache_dir, RgbColor::new(0, 0, 255)).unwrap();
        assert_eq!(first, second);
        let contents = fs::read(&second).unwrap();
        assert_eq!(contents.len(), PREVIEW_ICON_LEN);
        assert_eq!(contents[62..65], [255, 0, 0]);
    }
}
