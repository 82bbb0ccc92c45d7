/// Default character ramp, ordered darkest to brightest.
///
/// From Paul Bourke's character-based greyscale survey:
/// http://paulbourke.net/dataformats/asciiart/
pub const DEFAULT_RAMP: &str = ".:-=+*#%@";

/// Default output width in columns when the caller leaves it unset.
pub const DEFAULT_WIDTH: u32 = 240;
/// Default unsharp-mask strength.
pub const DEFAULT_SHARPEN: f64 = 5.0;
/// Default brightness adjustment, in percent of full scale.
pub const DEFAULT_BRIGHTNESS: f64 = 5.0;
/// Default contrast adjustment, in percent.
pub const DEFAULT_CONTRAST: f64 = 75.0;

/// Configuration for one image-to-ASCII conversion.
///
/// Zero/empty fields mean "unset"; call [`ProcessingConfig::with_defaults`]
/// to fill them in before handing the config to the pipeline. After
/// defaulting, `width > 0` and `ramp` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingConfig {
    /// Target output width in columns.
    pub width: u32,
    /// Target output height in rows; 0 derives it from `width`
    /// (see [`crate::preprocess::derive_height`]).
    pub height: u32,
    /// Unsharp-mask strength applied after resizing.
    pub sharpen: f64,
    /// Brightness adjustment in percent of full scale.
    pub brightness: f64,
    /// Contrast adjustment in percent.
    pub contrast: f64,
    /// Character ramp, darkest first.
    pub ramp: String,
}

impl ProcessingConfig {
    /// A config with every field unset. Useful as a base for callers
    /// that only want to override a field or two.
    pub fn unset() -> Self {
        Self {
            width: 0,
            height: 0,
            sharpen: 0.0,
            brightness: 0.0,
            contrast: 0.0,
            ramp: String::new(),
        }
    }

    /// Returns a copy of this config with every unset field replaced by
    /// its documented default. `height` is intentionally left alone:
    /// 0 is a meaningful value there (derive from width).
    ///
    /// Pure value-to-value defaulting — the caller's config is consumed,
    /// never mutated behind its back.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        if self.width == 0 {
            self.width = DEFAULT_WIDTH;
        }
        if self.sharpen == 0.0 {
            self.sharpen = DEFAULT_SHARPEN;
        }
        if self.brightness == 0.0 {
            self.brightness = DEFAULT_BRIGHTNESS;
        }
        if self.contrast == 0.0 {
            self.contrast = DEFAULT_CONTRAST;
        }
        if self.ramp.is_empty() {
            self.ramp = DEFAULT_RAMP.to_string();
        }
        self
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self::unset().with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_config_fills_documented_defaults() {
        let config = ProcessingConfig::unset().with_defaults();
        assert_eq!(config.width, 240);
        assert_eq!(config.height, 0);
        assert_eq!(config.sharpen, 5.0);
        assert_eq!(config.brightness, 5.0);
        assert_eq!(config.contrast, 75.0);
        assert_eq!(config.ramp, ".:-=+*#%@");
    }

    #[test]
    fn test_with_defaults_keeps_set_fields() {
        let config = ProcessingConfig {
            width: 120,
            height: 40,
            contrast: 10.0,
            ramp: " #".to_string(),
            ..ProcessingConfig::unset()
        }
        .with_defaults();

        assert_eq!(config.width, 120);
        assert_eq!(config.height, 40);
        assert_eq!(config.contrast, 10.0);
        assert_eq!(config.ramp, " #");
        // Unset fields still get defaults
        assert_eq!(config.sharpen, 5.0);
        assert_eq!(config.brightness, 5.0);
    }

    #[test]
    fn test_default_equals_defaulted_unset() {
        assert_eq!(
            ProcessingConfig::default(),
            ProcessingConfig::unset().with_defaults()
        );
    }
}
