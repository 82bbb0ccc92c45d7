//! img2ascii - image to ASCII art converter
//!
//! Converts a raster image into a textual rendering: the image is
//! resized and tonally adjusted, then every pixel's luminance is
//! mapped to a character from a brightness-ordered ramp.
//!
//! # Example
//! ```no_run
//! use img2ascii::{convert_image, ProcessingConfig};
//!
//! let input = image::open("photo.jpg").unwrap();
//! let config = ProcessingConfig {
//!     width: 80,
//!     ..ProcessingConfig::unset()
//! };
//! let mut out = Vec::new();
//! convert_image(&input, &config, &mut out).unwrap();
//! print!("{}", String::from_utf8(out).unwrap());
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod preprocess;
pub mod rasterize;
pub mod sink;

// Re-export main types for convenience
pub use config::{DEFAULT_RAMP, ProcessingConfig};
pub use convert::{convert_file, convert_image, load_image};
pub use error::ConvertError;
