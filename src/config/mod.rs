use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::render::{
    Color, DEFAULT_LONG_SIDE_PT, DEFAULT_PADDING_PT, OutputFormat, PolygonStyle, RenderOptions,
};

fn default_long_side_pt() -> f64 {
    DEFAULT_LONG_SIDE_PT
}
fn default_padding_pt() -> f64 {
    DEFAULT_PADDING_PT
}
fn default_format() -> OutputFormat {
    OutputFormat::Pdf
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default = "default_long_side_pt")]
    pub long_side_pt: f64,
    #[serde(default = "default_padding_pt")]
    pub padding_pt: f64,
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub plate: Option<StyleConfig>,
    #[serde(default)]
    pub pieces: Option<StyleConfig>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            long_side_pt: default_long_side_pt(),
            padding_pt: default_padding_pt(),
            format: default_format(),
            verbose: default_verbose(),
            plate: None,
            pieces: None,
        }
    }
}

/// Per-layer overrides; unset fields keep the layer's default style
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default)]
    pub fill: Option<Color>,
    #[serde(default)]
    pub fill_opacity: Option<f64>,
    #[serde(default)]
    pub edge: Option<Color>,
    #[serde(default)]
    pub line_width: Option<f64>,
}

impl StyleConfig {
    pub fn apply(&self, base: PolygonStyle) -> PolygonStyle {
        PolygonStyle {
            fill: self.fill.unwrap_or(base.fill),
            fill_opacity: self.fill_opacity.unwrap_or(base.fill_opacity),
            edge: self.edge.unwrap_or(base.edge),
            line_width: self.line_width.unwrap_or(base.line_width),
        }
    }
}

impl FileConfig {
    /// Search the usual locations, skipping files that fail to parse
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested file; any failure is fatal
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn render_options(&self) -> RenderOptions {
        let plate = self.plate.clone().unwrap_or_default();
        let pieces = self.pieces.clone().unwrap_or_default();

        RenderOptions {
            plate: plate.apply(PolygonStyle::plate()),
            piece: pieces.apply(PolygonStyle::piece()),
            long_side_pt: self.long_side_pt,
            padding_pt: self.padding_pt,
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("plateplot.toml"));
    paths.push(PathBuf::from(".plateplot.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("plateplot").join("config.toml"));
        paths.push(config_dir.join("plateplot.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".plateplot.toml"));
        paths.push(home.join(".config").join("plateplot").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert_eq!(config.format, OutputFormat::Pdf);
        assert!(!config.verbose);
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_partial_style_merges_with_defaults() {
        let config: FileConfig = toml::from_str(
            r##"
            format = "svg"
            padding_pt = 4.0

            [pieces]
            fill = "#ff8800"
            fill_opacity = 0.5
            "##,
        )
        .unwrap();

        let options = config.render_options();
        assert_eq!(config.format, OutputFormat::Svg);
        assert_eq!(options.padding_pt, 4.0);
        assert_eq!(options.long_side_pt, DEFAULT_LONG_SIDE_PT);
        assert_eq!(options.plate, PolygonStyle::plate());
        assert_eq!(options.piece.fill, Color::rgb(0xff, 0x88, 0x00));
        assert_eq!(options.piece.fill_opacity, 0.5);
        assert_eq!(options.piece.edge, Color::BLACK);
        assert_eq!(options.piece.line_width, 1.0);
    }

    #[test]
    fn test_bad_color_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("[plate]\nfill = \"mauve-ish\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("radius = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plateplot.toml");
        fs::write(&path, "long_side_pt = 200.0\n[plate]\nedge = \"red\"\n").unwrap();

        let config = FileConfig::from_path(&path).unwrap();
        let options = config.render_options();
        assert_eq!(options.long_side_pt, 200.0);
        assert_eq!(options.plate.edge, Color::rgb(0xff, 0, 0));
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempdir().unwrap();
        let err = FileConfig::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
