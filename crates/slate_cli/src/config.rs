//! Workspace configuration file handling
//!
//! An optional `slate.toml` next to the working directory sets defaults
//! that command-line flags override:
//!
//! ```toml
//! endpoint = "http://localhost:8000"
//!
//! [canvas]
//! width = 800
//! height = 600
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use slate_raster::{WHITEBOARD_HEIGHT, WHITEBOARD_WIDTH};

/// Configuration stored in `slate.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct SlateConfig {
    /// Base URL of the drawing/chat service.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub canvas: CanvasConfig,
}

/// Canvas dimensions for drawing requests and the local surface.
#[derive(Debug, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    WHITEBOARD_WIDTH
}

fn default_height() -> u32 {
    WHITEBOARD_HEIGHT
}

impl SlateConfig {
    /// Load `slate.toml` from a directory, falling back to defaults when
    /// the file does not exist.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join("slate.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_whiteboard_canvas() {
        let config = SlateConfig::default();
        assert_eq!(config.endpoint, None);
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
    }

    #[test]
    fn parses_partial_config() {
        let config: SlateConfig =
            toml::from_str("endpoint = \"http://example.com\"\n").unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
        assert_eq!(config.canvas.width, 800);
    }

    #[test]
    fn parses_canvas_overrides() {
        let config: SlateConfig =
            toml::from_str("[canvas]\nwidth = 1024\nheight = 768\n").unwrap();
        assert_eq!(config.canvas.width, 1024);
        assert_eq!(config.canvas.height, 768);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = SlateConfig::load_from_dir(Path::new("/definitely/not/here")).unwrap();
        assert_eq!(config.endpoint, None);
    }
}
