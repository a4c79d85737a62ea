use crate::lut::GlyphRamp;

/// Largest grid edge accepted by [`AsciiConfig::validate`]
pub const MAX_GRID_EDGE: u32 = 1000;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiConfig {
    /// Grid size
    pub width: u32,              // columns of sampled pixels, default 80
    pub height: u32,             // rows, default 40

    /// Mapping
    pub gamma: f32,              // (0.0, 10.0], default 1.0 (no correction)
    pub invert_luminance: bool,  // default false
    pub ramp: GlyphRamp,         // default DENSE_RAMP

    /// Rendering
    pub double_width: bool,      // two glyphs per pixel, default true
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self::wide()
    }
}

impl AsciiConfig {
    /// 80x40 grid, each pixel emitted as two glyphs
    pub fn wide() -> Self {
        Self {
            width: 80,
            height: 40,
            gamma: 1.0,
            invert_luminance: false,
            ramp: GlyphRamp::default(),
            double_width: true,
        }
    }

    /// 100x50 grid, one glyph per pixel
    pub fn narrow() -> Self {
        Self {
            width: 100,
            height: 50,
            double_width: false,
            ..Self::wide()
        }
    }

    /// Glyphs emitted per sampled pixel
    pub fn glyphs_per_pixel(&self) -> usize {
        if self.double_width { 2 } else { 1 }
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.width < 1 || self.width > MAX_GRID_EDGE {
            return Err(format!("width must be between 1 and {}, got {}", MAX_GRID_EDGE, self.width));
        }
        if self.height < 1 || self.height > MAX_GRID_EDGE {
            return Err(format!("height must be between 1 and {}, got {}", MAX_GRID_EDGE, self.height));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 || self.gamma > 10.0 {
            return Err(format!("gamma must be in (0.0, 10.0], got {}", self.gamma));
        }
        if self.ramp.is_empty() {
            return Err("glyph ramp must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AsciiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (80, 40));
        assert!(config.double_width);
        assert_eq!(config.gamma, 1.0);
    }

    #[test]
    fn test_narrow_preset() {
        let config = AsciiConfig::narrow();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (100, 50));
        assert_eq!(config.glyphs_per_pixel(), 1);
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut config = AsciiConfig::default();
        config.width = 0;
        assert!(config.validate().is_err());

        config.width = 80;
        config.height = MAX_GRID_EDGE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_gamma() {
        let mut config = AsciiConfig::default();
        config.gamma = 0.0;
        assert!(config.validate().is_err());

        config.gamma = f32::NAN;
        assert!(config.validate().is_err());

        config.gamma = 11.0;
        assert!(config.validate().is_err());

        config.gamma = 0.8;
        assert!(config.validate().is_ok());
    }
}
