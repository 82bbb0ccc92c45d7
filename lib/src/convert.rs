use crate::config::ProcessingConfig;
use crate::error::ConvertError;
use crate::preprocess::preprocess;
use crate::rasterize::rasterize;
use crate::sink::FanoutWriter;
use image::DynamicImage;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Open and decode a source image.
///
/// Any codec the `image` crate supports with default features works
/// here (PNG, JPEG, GIF and more); animated formats decode to their
/// first frame.
///
/// # Arguments
/// * `path` - Path to the source image file
///
/// # Returns
/// The decoded image, or [`ConvertError::Open`] / [`ConvertError::Decode`]
pub fn load_image(path: &Path) -> Result<DynamicImage, ConvertError> {
    log::info!("loading image: {}", path.display());

    image::open(path).map_err(|err| match err {
        image::ImageError::IoError(source) => ConvertError::Open {
            path: path.to_path_buf(),
            source,
        },
        source => ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Convert an already-decoded image to ASCII art, writing the text to
/// `sink`.
///
/// Applies [`ProcessingConfig::with_defaults`] first, so an unset or
/// partially-set config is fine; in particular the rasterizer is
/// guaranteed a non-empty ramp. The sink is not flushed — callers that
/// wrap it in a `BufWriter` flush when the conversion is done.
///
/// # Arguments
/// * `input` - The decoded source image
/// * `config` - Conversion settings, defaulted as needed
/// * `sink` - Destination for the text output
pub fn convert_image(
    input: &DynamicImage,
    config: &ProcessingConfig,
    sink: &mut impl Write,
) -> Result<(), ConvertError> {
    let config = config.clone().with_defaults();
    let processed = preprocess(input, &config).to_rgba8();
    rasterize(&processed, &config, sink)?;
    Ok(())
}

/// Run the whole batch pipeline: load the source image, create the
/// destination file, convert, and flush.
///
/// With `term` set, output is duplicated to stdout through a
/// [`FanoutWriter`]; a failure on either sink aborts the run. The file
/// handle closes on every exit path when it drops. On error the
/// destination may hold a partial rendering — the caller decides what
/// to do with it.
///
/// # Arguments
/// * `source` - Path to the source image
/// * `output` - Destination text file, created or truncated
/// * `config` - Conversion settings, defaulted as needed
/// * `term` - Also stream the output to stdout
pub fn convert_file(
    source: &Path,
    output: &Path,
    config: &ProcessingConfig,
    term: bool,
) -> Result<(), ConvertError> {
    let img = load_image(source)?;

    log::info!("creating output file: {}", output.display());
    let file = File::create(output).map_err(|err| ConvertError::CreateOutput {
        path: output.to_path_buf(),
        source: err,
    })?;

    let mut sinks: Vec<Box<dyn Write>> = vec![Box::new(file)];
    if term {
        sinks.push(Box::new(io::stdout()));
    }
    let mut sink = BufWriter::new(FanoutWriter::new(sinks));

    convert_image(&img, config, &mut sink)?;
    sink.flush()?;

    Ok(())
}
