use crate::config::ProcessingConfig;
use image::DynamicImage;
use image::imageops::FilterType;

/// Character-cell aspect correction, as a ratio of rows to columns.
///
/// Terminal cells are roughly twice as tall as they are wide, so a
/// square image needs fewer rows than columns to look square. The
/// derived height is `width * 10 / 16` (0.625), a fixed ratio that
/// deliberately ignores the source image's own aspect ratio.
pub const CELL_ASPECT_NUM: u32 = 10;
pub const CELL_ASPECT_DEN: u32 = 16;

/// Derive an output row count from the output column count using the
/// character-cell aspect correction.
///
/// # Arguments
/// * `width` - Target output width in columns
///
/// # Returns
/// The row count, `width * 10 / 16` with integer division
pub fn derive_height(width: u32) -> u32 {
    width * CELL_ASPECT_NUM / CELL_ASPECT_DEN
}

/// Apply the geometric and tonal transforms that prepare an image for
/// rasterization.
///
/// The pipeline is:
/// 1. Resize to `(config.width, height)` with Lanczos3, where `height`
///    is `config.height` or, when 0, derived via [`derive_height`].
///    Resizing comes first so the tone passes run at output resolution.
/// 2. Unsharp-mask with sigma `config.sharpen`.
/// 3. Brighten by `config.brightness` percent of full scale.
/// 4. Adjust contrast by `config.contrast` percent.
///
/// Each step allocates a new image; the input is never mutated.
///
/// # Arguments
/// * `input` - The decoded source image
/// * `config` - Conversion settings (already defaulted)
///
/// # Returns
/// A new image at output resolution, ready for the rasterizer
pub fn preprocess(input: &DynamicImage, config: &ProcessingConfig) -> DynamicImage {
    let height = if config.height == 0 {
        derive_height(config.width)
    } else {
        config.height
    };

    log::info!(
        "preprocessing image: {}x{} -> {}x{}",
        input.width(),
        input.height(),
        config.width,
        height
    );

    // Brightness is a percentage of full scale, applied as a flat
    // per-channel shift
    let shift = (config.brightness / 100.0 * 255.0).round() as i32;

    input
        .resize_exact(config.width, height, FilterType::Lanczos3)
        .unsharpen(config.sharpen as f32, 0)
        .brighten(shift)
        .adjust_contrast(config.contrast as f32)
}
