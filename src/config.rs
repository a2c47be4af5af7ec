use crate::error::{ProfilerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = ProfilerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            other => Err(ProfilerError::Config(format!(
                "unsupported image format '{other}' (expected png or svg)"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub format: ImageFormat,
    /// Pixels; 600x400 matches a 6x4 inch figure at 100 dpi
    pub width: u32,
    pub height: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            width: 600,
            height: 400,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for rotating log files; console only when unset
    pub dir: Option<PathBuf>,
}

/// Settings of one profiling run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Most frequent values kept per non-numeric column (default: 5)
    pub top_n: usize,
    /// Bars drawn per categorical chart (default: 10)
    pub max_categories: usize,
    /// Bins per numeric histogram (default: 30)
    pub histogram_bins: usize,
    pub image: ImageConfig,
    pub logging: LoggingConfig,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            top_n: crate::summary::DEFAULT_TOP_N,
            max_categories: 10,
            histogram_bins: 30,
            image: ImageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ProfileConfig {
    /// Loads a JSON config file, or the defaults when `path` is `None`.
    ///
    /// Keys missing from the file keep their default value.
    ///
    /// # Errors
    ///
    /// [`ProfilerError::Config`] if the file cannot be read, is not valid JSON,
    /// or holds out-of-range values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            ProfilerError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ProfilerError::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })?;
        config.validate()?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// # Errors
    ///
    /// [`ProfilerError::Config`] naming the first field that is zero.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("top_n", self.top_n),
            ("max_categories", self.max_categories),
            ("histogram_bins", self.histogram_bins),
            ("image.width", self.image.width as usize),
            ("image.height", self.image.height as usize),
        ];
        match checks.iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(ProfilerError::Config(format!("{field} must be at least 1"))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ProfileConfig::load(None).unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.max_categories, 10);
        assert_eq!(config.histogram_bins, 30);
        assert_eq!(config.image.format, ImageFormat::Png);
        assert!(config.logging.dir.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("dataprof.json");
        std::fs::write(&path, r#"{ "top_n": 3, "image": { "format": "svg" } }"#)?;

        let config = ProfileConfig::load(Some(&path))?;
        assert_eq!(config.top_n, 3);
        assert_eq!(config.max_categories, 10);
        assert_eq!(config.image.format, ImageFormat::Svg);
        assert_eq!(config.image.width, 600);
        Ok(())
    }

    #[test]
    fn test_zero_bins_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("dataprof.json");
        std::fs::write(&path, r#"{ "histogram_bins": 0 }"#)?;

        let err = ProfileConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("histogram_bins"));
        Ok(())
    }

    #[test]
    fn test_unreadable_file_is_config_error() {
        let result = ProfileConfig::load(Some(Path::new("no/such/config.json")));
        assert!(matches!(result, Err(ProfilerError::Config(_))));
    }

    #[test]
    fn test_image_format_from_str() {
        assert_eq!("SVG".parse::<ImageFormat>().unwrap(), ImageFormat::Svg);
        assert!("gif".parse::<ImageFormat>().is_err());
    }
}
