//! Glyph ramps and the luminance lookup table
//!
//! A ramp is an ordered list of glyphs. Index 0 is what luminance 0 renders
//! as and the last index is what luminance 255 renders as.

/// Dense to sparse ramp, 71 glyphs
///
/// Dark pixels become ink-heavy glyphs, which reads correctly as dark text on
/// a light page. The trailing double space widens the blank bin on purpose.
pub const DENSE_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'.  ";

/// Sparse to dense ramp, 10 glyphs
///
/// Suited to light text on a dark terminal.
pub const SIMPLE_RAMP: &str = " .:-=+*#%@";

/// An ordered, non-empty sequence of glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from a string, one glyph per `char`
    pub fn new(glyphs: &str) -> Result<Self, String> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err("glyph ramp must contain at least one character".to_string());
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false, kept for parity with `len`
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Glyph at `index`, clamped to the last glyph
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DENSE_RAMP.chars().collect(),
        }
    }
}

/// Apply gamma correction to a luminance sample
///
/// Formula: g' = (g / 255)^gamma * 255
pub fn gamma_correct(luminance: u8, gamma: f32) -> f64 {
    let normalized = luminance as f64 / 255.0;
    normalized.powf(gamma as f64) * 255.0
}

/// Quantize a (possibly gamma corrected) luminance onto `levels` bins
///
/// Formula: idx = floor((g / 255) * (levels - 1)), clamped to the last bin
pub fn ramp_index(luminance: f64, levels: usize) -> usize {
    if levels <= 1 {
        return 0;
    }
    let max = (levels - 1) as f64;
    let index = ((luminance / 255.0) * max).floor();
    (index.clamp(0.0, max)) as usize
}

/// Precomputed glyph for every possible 8-bit luminance
///
/// Built once per mapping call so each sample costs a single table read.
#[derive(Debug, Clone)]
pub struct GlyphLut {
    table: [char; 256],
}

impl GlyphLut {
    /// Build the table for a ramp, gamma and inversion setting
    pub fn new(ramp: &GlyphRamp, gamma: f32, invert: bool) -> Self {
        let mut table = [' '; 256];
        for (value, slot) in table.iter_mut().enumerate() {
            let mut luminance = value as u8;
            if invert {
                luminance = 255 - luminance;
            }
            let corrected = gamma_correct(luminance, gamma);
            *slot = ramp.glyph(ramp_index(corrected, ramp.len()));
        }
        Self { table }
    }

    #[inline]
    pub fn glyph(&self, luminance: u8) -> char {
        self.table[luminance as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_ramp_length() {
        assert_eq!(DENSE_RAMP.chars().count(), 71);
        assert!(DENSE_RAMP.starts_with('$'));
        assert!(DENSE_RAMP.ends_with("  "));
    }

    #[test]
    fn test_empty_ramp_rejected() {
        assert!(GlyphRamp::new("").is_err());
    }

    #[test]
    fn test_glyph_clamps_index() {
        let ramp = GlyphRamp::new("ab").unwrap();
        assert_eq!(ramp.glyph(0), 'a');
        assert_eq!(ramp.glyph(1), 'b');
        assert_eq!(ramp.glyph(99), 'b');
    }

    #[test]
    fn test_ramp_index_endpoints() {
        assert_eq!(ramp_index(0.0, 4), 0);
        assert_eq!(ramp_index(255.0, 4), 3);
        assert_eq!(ramp_index(255.0, 71), 70);
    }

    #[test]
    fn test_ramp_index_single_level() {
        assert_eq!(ramp_index(0.0, 1), 0);
        assert_eq!(ramp_index(255.0, 1), 0);
    }

    #[test]
    fn test_ramp_index_floors() {
        // 127 / 255 * 3 = 1.494...
        assert_eq!(ramp_index(127.0, 4), 1);
        // 170 / 255 * 3 = 2.0
        assert_eq!(ramp_index(170.0, 4), 2);
    }

    #[test]
    fn test_gamma_identity() {
        for g in [0u8, 1, 64, 128, 200, 255] {
            assert!((gamma_correct(g, 1.0) - g as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gamma_brightens_midtones() {
        // Exponent below 1 lifts midtones, endpoints stay fixed
        assert!(gamma_correct(128, 0.8) > 128.0);
        assert_eq!(gamma_correct(0, 0.8), 0.0);
        assert!((gamma_correct(255, 0.8) - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_lut_contrast_gamma_glyphs() {
        let lut = GlyphLut::new(&GlyphRamp::default(), 0.8, false);
        // (64/255)^0.8 * 70 = 23.16 -> 'Q'
        assert_eq!(lut.glyph(64), 'Q');
        // (128/255)^0.8 * 70 = 40.33 -> '/'
        assert_eq!(lut.glyph(128), '/');
        // (200/255)^0.8 * 70 = 57.64 -> 'i'
        assert_eq!(lut.glyph(200), 'i');
        assert_eq!(lut.glyph(0), '$');
        assert_eq!(lut.glyph(255), ' ');
    }

    #[test]
    fn test_lut_endpoints() {
        let ramp = GlyphRamp::new("@#. ").unwrap();
        let lut = GlyphLut::new(&ramp, 1.0, false);
        assert_eq!(lut.glyph(0), '@');
        assert_eq!(lut.glyph(255), ' ');
    }

    #[test]
    fn test_lut_inverted() {
        let ramp = GlyphRamp::new("@#. ").unwrap();
        let lut = GlyphLut::new(&ramp, 1.0, true);
        assert_eq!(lut.glyph(0), ' ');
        assert_eq!(lut.glyph(255), '@');
    }

    #[test]
    fn test_lut_monotonic() {
        let ramp = GlyphRamp::default();
        for gamma in [0.5, 0.8, 1.0, 2.2] {
            let lut = GlyphLut::new(&ramp, gamma, false);
            let position = |c: char| ramp.glyphs().iter().position(|&g| g == c).unwrap();
            let mut previous = 0;
            for value in 0..=255u8 {
                let index = position(lut.glyph(value));
                assert!(index >= previous, "inversion at {value} for gamma {gamma}");
                previous = index;
            }
        }
    }
}
