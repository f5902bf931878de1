//! Drawing session configuration.
//!
//! `SessionConfig` holds the drawing layer size, the stroke style and the
//! flattening precision. Every field has a default, so a TOML file only
//! needs the keys it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Edge length of the square drawing layer in pixels.
pub const DEFAULT_LAYER_SIZE: u32 = 512;
/// Stroke width in layer pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 10.0;
/// Opaque white.
pub const DEFAULT_STROKE_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];
/// Longest miter, in half line widths, before the join is beveled.
pub const DEFAULT_MITER_LIMIT: f64 = 4.0;

// ============================================================================
// Stroke style
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// How a stroke is outlined. Strokes are never filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub line_width: f64,
    /// RGBA, each component in `[0, 1]`.
    pub color: [f64; 4],
    pub line_join: LineJoin,
    pub line_cap: LineCap,
    /// Only used by `LineJoin::Miter`.
    pub miter_limit: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            color: DEFAULT_STROKE_COLOR,
            line_join: LineJoin::default(),
            line_cap: LineCap::default(),
            miter_limit: DEFAULT_MITER_LIMIT,
        }
    }
}

impl StrokeStyle {
    /// Furthest distance the stroke outline reaches from the centreline.
    ///
    /// Round caps and joins stay within half the line width. A square cap
    /// corner sits at `sqrt(2)` half widths; a miter tip at up to
    /// `miter_limit` half widths.
    pub fn outset(&self) -> f64 {
        let cap = match self.line_cap {
            LineCap::Butt | LineCap::Round => 1.0,
            LineCap::Square => std::f64::consts::SQRT_2,
        };
        let join = match self.line_join {
            LineJoin::Round | LineJoin::Bevel => 1.0,
            LineJoin::Miter => self.miter_limit,
        };
        self.line_width * 0.5 * cap.max(join)
    }
}

// ============================================================================
// SessionConfig
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub layer_size: u32,
    /// Flattening scale, see `Curve4Div::set_approximation_scale`.
    pub approximation_scale: f64,
    pub stroke: StrokeStyle,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            layer_size: DEFAULT_LAYER_SIZE,
            approximation_scale: 1.0,
            stroke: StrokeStyle::default(),
        }
    }
}

impl SessionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("session config loaded from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        log::debug!("session config saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.layer_size == 0 {
            return Err(Error::InvalidConfig("layer_size must be positive".into()));
        }
        if !(self.approximation_scale.is_finite() && self.approximation_scale > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "approximation_scale must be a positive number, got {}",
                self.approximation_scale
            )));
        }
        let width = self.stroke.line_width;
        if !(width.is_finite() && width > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "stroke.line_width must be a positive number, got {}",
                width
            )));
        }
        let miter = self.stroke.miter_limit;
        if !(miter.is_finite() && miter >= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "stroke.miter_limit must be at least 1, got {}",
                miter
            )));
        }
        if let Some(c) = self
            .stroke
            .color
            .iter()
            .find(|c| !(0.0..=1.0).contains(*c))
        {
            return Err(Error::InvalidConfig(format!(
                "stroke.color components must be in [0, 1], got {}",
                c
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
