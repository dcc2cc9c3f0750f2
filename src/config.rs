//! Toolkit configuration
//!
//! Loaded from a TOML file. Every section and field is optional and falls
//! back to its default, so an empty file is a valid configuration.

use crate::buffer::Canvas;
use crate::error::RenderError;
use crate::layout::{Direction, Stack};
use crate::limiter::FrameLimiter;
use crate::style::Style;
use crate::widget::builtin::{ListItem, SelectionList};
use crate::widget::{BorderType, Props};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "INKGRID_CONFIG";

/// Top-level toolkit configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TuiConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TuiConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read config file {}", path.display()))
            }
        }
    }

    /// Load from the file named by `INKGRID_CONFIG`, or the defaults
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Invalid log level: {}", self.logging.level),
        }
        if self.render.frame_interval_ms == 0 {
            anyhow::bail!("Frame interval must be at least 1ms");
        }
        Ok(())
    }
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Own the whole screen instead of rendering below the prompt
    pub fullscreen: bool,
    /// Minimum time between redraws
    pub frame_interval_ms: u64,
    /// Border applied by [`RenderConfig::props`]
    pub border: BorderType,
    /// Style of a list's selected row
    pub highlight: Style,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fullscreen: true,
            frame_interval_ms: 16,
            border: BorderType::Single,
            highlight: Style::new().reversed(),
        }
    }
}

impl RenderConfig {
    pub fn frame_limiter(&self) -> FrameLimiter {
        FrameLimiter::new(Duration::from_millis(self.frame_interval_ms))
    }

    /// Canvas for a terminal of the given size; `cursor_row` only matters
    /// for inline rendering
    pub fn canvas(&self, width: u16, height: u16, cursor_row: u16) -> Result<Canvas, RenderError> {
        if self.fullscreen {
            Canvas::fullscreen(width, height)
        } else {
            Canvas::inline(width, height, cursor_row)
        }
    }

    /// Widget props carrying the configured border
    pub fn props(&self) -> Props {
        Props::new().border(self.border)
    }

    /// Selection list with the configured border and highlight
    pub fn list<'a, T: ListItem>(&self, items: &'a [T]) -> SelectionList<'a, T> {
        SelectionList::new(items)
            .with_props(self.props())
            .highlight(self.highlight)
    }
}

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Cells between stacked children
    pub gap: u16,
}

impl LayoutConfig {
    /// Empty stack using the configured gap
    pub fn stack<'a>(&self, direction: Direction) -> Stack<'a> {
        Stack::new(direction).gap(self.gap)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Modifier};
    use crate::widget::Widget;

    #[test]
    fn test_defaults() {
        let config = TuiConfig::default();
        assert!(config.render.fullscreen);
        assert_eq!(config.render.frame_interval_ms, 16);
        assert_eq!(config.render.border, BorderType::Single);
        assert!(config.render.highlight.modifier.contains(Modifier::REVERSED));
        assert_eq!(config.layout.gap, 0);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(TuiConfig::from_toml_str("").unwrap(), TuiConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = TuiConfig::from_toml_str(
            r##"
            [render]
            fullscreen = false
            border = "rounded"

            [render.highlight]
            fg = "#ff8800"
            modifier = ["bold", "underlined"]
            "##,
        )
        .unwrap();

        assert!(!config.render.fullscreen);
        assert_eq!(config.render.frame_interval_ms, 16);
        assert_eq!(config.render.border, BorderType::Rounded);
        assert_eq!(config.render.highlight.fg, Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(config.render.highlight.bg, Color::Reset);
        assert_eq!(
            config.render.highlight.modifier,
            Modifier::BOLD | Modifier::UNDERLINED
        );
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(TuiConfig::from_toml_str("[render]\nborder = \"dotted\"").is_err());
        assert!(TuiConfig::from_toml_str("[render.highlight]\nfg = \"mauve\"").is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = TuiConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = TuiConfig::default();
        config.render.frame_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_canvas_mode_follows_config() {
        let mut render = RenderConfig::default();
        assert!(render.canvas(10, 5, 3).unwrap().is_fullscreen());

        render.fullscreen = false;
        let canvas = render.canvas(10, 5, 3).unwrap();
        assert!(!canvas.is_fullscreen());
        assert_eq!(canvas.scroll_offset(), 3);
    }

    #[test]
    fn test_builders_carry_settings() {
        let render = RenderConfig::default();
        assert_eq!(render.frame_limiter().min_interval(), Duration::from_millis(16));

        let items = ["one", "two"];
        let mut list = render.list(&items);
        assert_eq!(list.props().border, BorderType::Single);
        assert_eq!(list.layout(crate::layout::Constraints::unbounded()).height, 4);

        let stack = LayoutConfig { gap: 2 }.stack(Direction::Horizontal);
        assert!(stack.is_empty());
    }
}
