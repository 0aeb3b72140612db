//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme used by the renderer. A built-in
//! palette (Catppuccin Mocha) is always available; custom palettes are loaded
//! from TOML files. Colors are emitted as 24-bit ANSI escapes, and a theme
//! built with [`Theme::plain`] emits no escapes at all.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! tab_active_fg = "#1e1e2e"
//! tab_active_bg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! busy_fg = "#f9e2af"
//! success_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! accent_fg = "#89b4fa"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```
//! use ragdesk::ui::Theme;
//!
//! let theme = Theme::default();
//! let styled = theme.paint(&theme.colors.error_fg, "failed");
//! assert!(styled.contains("failed"));
//! assert_eq!(Theme::plain().paint("#ff0000", "failed"), "failed");
//! ```

use crate::domain::{RagdeskError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const RESET: &str = "\u{001b}[0m";
const BOLD: &str = "\u{001b}[1m";
const DIM: &str = "\u{001b}[2m";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
    /// Whether escapes are emitted. Never read from theme files.
    #[serde(skip, default = "colors_enabled")]
    pub enabled: bool,
}

const fn colors_enabled() -> bool {
    true
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,

    /// Active tab foreground color.
    pub tab_active_fg: String,
    /// Active tab background color.
    pub tab_active_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// In-flight phase indicator.
    pub busy_fg: String,
    /// Succeeded phase indicator.
    pub success_fg: String,
    /// Failed phase indicator and error text.
    pub error_fg: String,

    /// Result ranks and document names.
    pub accent_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let colors = match name {
            "catppuccin-mocha" => mocha_colors(),
            "catppuccin-latte" => ThemeColors {
                header_fg: "#4c4f69".into(),
                tab_active_fg: "#eff1f5".into(),
                tab_active_bg: "#8839ef".into(),
                text_normal: "#4c4f69".into(),
                text_dim: "#9ca0b0".into(),
                border: "#bcc0cc".into(),
                busy_fg: "#df8e1d".into(),
                success_fg: "#40a02b".into(),
                error_fg: "#d20f39".into(),
                accent_fg: "#1e66f5".into(),
                empty_state_fg: "#1e66f5".into(),
            },
            _ => return None,
        };

        Some(Self {
            name: name.to_string(),
            colors,
            enabled: true,
        })
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RagdeskError::Theme`] if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields, type mismatches)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| RagdeskError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents).map_err(|e| RagdeskError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// The default palette with every escape sequence suppressed.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for `hex`, empty for a plain theme.
    #[must_use]
    pub fn fg(&self, hex: &str) -> String {
        if !self.enabled {
            return String::new();
        }
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for `hex`, empty for a plain theme.
    #[must_use]
    pub fn bg(&self, hex: &str) -> String {
        if !self.enabled {
            return String::new();
        }
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold(&self) -> &'static str {
        if self.enabled {
            BOLD
        } else {
            ""
        }
    }

    #[must_use]
    pub const fn dim(&self) -> &'static str {
        if self.enabled {
            DIM
        } else {
            ""
        }
    }

    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }

    /// Wraps `text` in a foreground color followed by a reset.
    #[must_use]
    pub fn paint(&self, hex: &str, text: &str) -> String {
        format!("{}{text}{}", self.fg(hex), self.reset())
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    fn default() -> Self {
        Self {
            name: "catppuccin-mocha".to_string(),
            colors: mocha_colors(),
            enabled: true,
        }
    }
}

fn mocha_colors() -> ThemeColors {
    ThemeColors {
        header_fg: "#cdd6f4".into(),
        tab_active_fg: "#1e1e2e".into(),
        tab_active_bg: "#cba6f7".into(),
        text_normal: "#cdd6f4".into(),
        text_dim: "#6c7086".into(),
        border: "#45475a".into(),
        busy_fg: "#f9e2af".into(),
        success_fg: "#a6e3a1".into(),
        error_fg: "#f38ba8".into(),
        accent_fg: "#89b4fa".into(),
        empty_state_fg: "#89b4fa".into(),
    }
}
