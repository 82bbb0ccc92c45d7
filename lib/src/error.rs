use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong during a conversion.
///
/// All variants are fatal: the pipeline is single-pass batch
/// conversion, so errors propagate straight to the caller with no
/// retry. A `Write` failure leaves a partially written destination
/// behind; nothing rolls it back.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source file could not be opened or read.
    #[error("failed to open source image {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source file is not in a recognized image format.
    #[error("failed to decode source image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The destination file could not be created or truncated.
    #[error("failed to create output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A write to the output sink(s) failed mid-rasterization.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}
