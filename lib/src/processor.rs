use crate::ascii::{GrayBuffer, render_ascii};
use crate::config::AsciiConfig;
use crate::error::ConvertError;
use image::{Luma, Pixel, imageops};

/// Decode an image, force it to the target grid and reduce it to grayscale
///
/// The resize fills the exact target dimensions regardless of the source
/// aspect ratio (no letterboxing, no cropping) using Lanczos3 filtering.
/// Grayscale conversion uses the luminance weighting of the `image` crate.
///
/// # Arguments
/// * `bytes` - Encoded image in any format the `image` crate can guess (PNG, JPEG, GIF, WebP, ...)
/// * `target_width` - Grid columns
/// * `target_height` - Grid rows
///
/// # Returns
/// Raw grayscale samples together with the actual dimensions and channel count
pub fn resize_and_grayscale(
    bytes: &[u8],
    target_width: u32,
    target_height: u32,
) -> Result<GrayBuffer, ConvertError> {
    if target_width == 0 || target_height == 0 {
        return Err(ConvertError::EmptyGrid {
            width: target_width,
            height: target_height,
        });
    }

    let decoded = image::load_from_memory(bytes)?;
    let resized = decoded.resize_exact(target_width, target_height, imageops::FilterType::Lanczos3);
    let gray = resized.to_luma8();
    let (width, height) = gray.dimensions();
    let channels = Luma::<u8>::CHANNEL_COUNT;
    let data = gray.into_raw();

    log::debug!(
        "Image processing result: width={} height={} channels={} size={}",
        width,
        height,
        channels,
        data.len()
    );

    GrayBuffer::new(data, width, height, channels)
}

/// Converts an encoded image into ASCII art
///
/// Pipeline:
/// 1. Validate the configuration
/// 2. Decode, fill-resize to the configured grid and convert to grayscale
/// 3. Map every luminance sample through the glyph ramp
///
/// # Arguments
/// * `bytes` - The encoded input image
/// * `config` - Configuration parameters for the conversion
///
/// # Returns
/// The newline-delimited glyph grid
pub fn convert(bytes: &[u8], config: &AsciiConfig) -> Result<String, ConvertError> {
    config.validate().map_err(ConvertError::InvalidConfig)?;

    let buffer = resize_and_grayscale(bytes, config.width, config.height)?;
    let ascii = render_ascii(&buffer, config)?;

    if ascii.is_empty() {
        return Err(ConvertError::EmptyResult);
    }
    Ok(ascii)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        bytes
    }

    #[test]
    fn test_fill_resize_ignores_aspect_ratio() {
        let img = RgbImage::from_pixel(300, 20, Rgb([10, 200, 30]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Png);

        let buffer = resize_and_grayscale(&bytes, 80, 40).unwrap();
        assert_eq!((buffer.width, buffer.height, buffer.channels), (80, 40, 1));
        assert_eq!(buffer.data.len(), 80 * 40);
    }

    #[test]
    fn test_uniform_image_keeps_luminance() {
        let img = GrayImage::from_pixel(32, 32, Luma([255]));
        let bytes = encode(DynamicImage::ImageLuma8(img), ImageFormat::Png);

        let buffer = resize_and_grayscale(&bytes, 4, 4).unwrap();
        assert!(buffer.data.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_jpeg_input() {
        let img = RgbImage::from_pixel(64, 64, Rgb([0, 0, 0]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Jpeg);

        let buffer = resize_and_grayscale(&bytes, 10, 5).unwrap();
        assert_eq!((buffer.width, buffer.height), (10, 5));
    }

    #[test]
    fn test_non_image_rejected() {
        let result = resize_and_grayscale(b"definitely not an image", 80, 40);
        assert!(matches!(result, Err(ConvertError::Decode(_))));
    }

    #[test]
    fn test_zero_target_rejected() {
        let result = resize_and_grayscale(&[], 0, 40);
        assert!(matches!(result, Err(ConvertError::EmptyGrid { .. })));
    }

    #[test]
    fn test_convert_white_image_narrow() {
        let img = GrayImage::from_pixel(200, 100, Luma([255]));
        let bytes = encode(DynamicImage::ImageLuma8(img), ImageFormat::Png);

        let ascii = convert(&bytes, &AsciiConfig::narrow()).unwrap();
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len(), 50);
        // White lands on the last (blank) glyph of the dense ramp
        assert!(lines.iter().all(|line| line.len() == 100 && line.trim().is_empty()));
    }

    #[test]
    fn test_convert_black_image_wide() {
        let img = GrayImage::from_pixel(64, 64, Luma([0]));
        let bytes = encode(DynamicImage::ImageLuma8(img), ImageFormat::Png);

        let ascii = convert(&bytes, &AsciiConfig::default()).unwrap();
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len(), 40);
        assert!(lines.iter().all(|line| *line == "$".repeat(160)));
    }

    #[test]
    fn test_convert_rejects_invalid_config() {
        let config = AsciiConfig {
            gamma: -1.0,
            ..AsciiConfig::default()
        };
        let result = convert(&[], &config);
        assert!(matches!(result, Err(ConvertError::InvalidConfig(_))));
    }
}
