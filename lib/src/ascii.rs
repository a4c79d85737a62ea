use crate::config::AsciiConfig;
use crate::error::ConvertError;
use crate::lut::GlyphLut;

/// Row-major grayscale samples with an explicit stride
///
/// The luminance of a sample is its first byte; any further channel bytes
/// are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl GrayBuffer {
    /// Wrap raw samples, rejecting any size that disagrees with the dimensions
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Result<Self, ConvertError> {
        check_dimensions(data.len(), width, height, channels)?;
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Luminance at grid position (x, y), `None` outside the grid
    pub fn luminance(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * self.channels as usize;
        self.data.get(index).copied()
    }
}

/// Check that `len` bytes exactly cover a `width`x`height` grid
fn check_dimensions(len: usize, width: u32, height: u32, channels: u8) -> Result<(), ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::EmptyGrid { width, height });
    }
    if channels == 0 {
        return Err(ConvertError::ZeroChannels);
    }
    let expected = width as usize * height as usize * channels as usize;
    if len != expected {
        return Err(ConvertError::SizeMismatch {
            width,
            height,
            channels,
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Map every sample of a buffer to glyphs and assemble the text grid
///
/// # Arguments
/// * `buffer` - Grayscale samples, row-major
/// * `config` - Ramp, gamma, inversion and double-width settings
///
/// # Returns
/// `height` lines, each terminated by `\n`, each holding `width` glyphs
/// (`2 * width` in double-width mode)
pub fn render_ascii(buffer: &GrayBuffer, config: &AsciiConfig) -> Result<String, ConvertError> {
    // Fields are public, so re-check before slicing rows
    check_dimensions(buffer.data.len(), buffer.width, buffer.height, buffer.channels)?;

    let lut = GlyphLut::new(&config.ramp, config.gamma, config.invert_luminance);
    let repeat = config.glyphs_per_pixel();
    let stride = buffer.channels as usize;
    let row_bytes = buffer.width as usize * stride;
    let line_len = buffer.width as usize * repeat + 1;
    let mut ascii = String::with_capacity(line_len * buffer.height as usize);

    for row in buffer.data.chunks_exact(row_bytes) {
        for sample in row.chunks_exact(stride) {
            let glyph = lut.glyph(sample[0]);
            for _ in 0..repeat {
                ascii.push(glyph);
            }
        }
        ascii.push('\n');
    }

    Ok(ascii)
}
