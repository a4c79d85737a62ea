//! asciify - image to ASCII art converter
//!
//! Decodes an image, fill-resizes it to a small grid, converts it to
//! grayscale and maps each luminance sample to a glyph from an ordered ramp.
//!
//! # Example
//! ```no_run
//! use asciify::{convert, AsciiConfig};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let ascii = convert(&bytes, &AsciiConfig::narrow()).unwrap();
//! print!("{}", ascii);
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod lut;
pub mod processor;

// Re-export main types for convenience
pub use ascii::{GrayBuffer, render_ascii};
pub use config::AsciiConfig;
pub use error::ConvertError;
pub use lut::{DENSE_RAMP, GlyphRamp, SIMPLE_RAMP};
pub use processor::{convert, resize_and_grayscale};
