use thiserror::Error;

/// Errors produced while turning an image into ASCII art
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("channel count must be non-zero")]
    ZeroChannels,

    #[error(
        "buffer holds {actual} bytes but a {width}x{height} grid with {channels} channel(s) needs {expected}"
    )]
    SizeMismatch {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("ASCII generation failed")]
    EmptyResult,
}
