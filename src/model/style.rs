//! Document-wide default style and measurement units.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Twips per inch (1 twip = 1/20 point).
const TWIPS_PER_INCH: f32 = 1440.0;

/// Twips per point.
const TWIPS_PER_POINT: f32 = 20.0;

/// Largest indent accepted from outline input, in inches (the widest
/// page WordprocessingML allows).
pub const MAX_INCHES: f32 = 22.0;

/// A signed length, stored in twips.
///
/// Negative values are meaningful for first-line indents, where they
/// produce a hanging indent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(i32);

impl Length {
    /// Zero length.
    pub const ZERO: Length = Length(0);

    /// Create a length from inches.
    ///
    /// Out-of-range values saturate; use [`Length::try_inches`] for
    /// untrusted input.
    pub fn inches(inches: f32) -> Self {
        Length((inches * TWIPS_PER_INCH).round() as i32)
    }

    /// Create a length from inches, or `None` if `inches` is not finite or
    /// exceeds [`MAX_INCHES`] in magnitude.
    pub fn try_inches(inches: f32) -> Option<Self> {
        (inches.is_finite() && inches.abs() <= MAX_INCHES).then(|| Self::inches(inches))
    }

    /// Create a length from points.
    pub fn points(points: f32) -> Self {
        Length((points * TWIPS_PER_POINT).round() as i32)
    }

    /// Create a length from raw twips.
    pub const fn from_twips(twips: i32) -> Self {
        Length(twips)
    }

    /// Length in twips.
    pub fn twips(self) -> i32 {
        self.0
    }

    /// Length in points.
    pub fn as_points(self) -> f32 {
        self.0 as f32 / TWIPS_PER_POINT
    }

    /// Length in inches.
    pub fn as_inches(self) -> f32 {
        self.0 as f32 / TWIPS_PER_INCH
    }

    /// Check if the length is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if the length is negative.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        Length(self.0.saturating_abs())
    }
}

impl std::ops::Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length(self.0.saturating_neg())
    }
}

/// Line spacing rule for paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    /// Single spacing
    Single,
    /// 1.5 line spacing
    OneAndHalf,
    /// Double spacing (default)
    #[default]
    Double,
}

impl LineSpacing {
    /// Spacing multiplier relative to single spacing.
    pub fn multiplier(self) -> f32 {
        match self {
            LineSpacing::Single => 1.0,
            LineSpacing::OneAndHalf => 1.5,
            LineSpacing::Double => 2.0,
        }
    }

    /// WordprocessingML `w:line` value for `lineRule="auto"` (240ths of a line).
    pub fn line_value(self) -> u32 {
        (self.multiplier() * 240.0) as u32
    }
}

/// The single default style a document is created with.
///
/// Every block inherits font and spacing from the style sheet; block
/// builders only set alignment, indentation and emphasis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Style name (the default paragraph style)
    pub name: String,

    /// Font family
    pub font_name: String,

    /// Font size in points
    pub font_size: f32,

    /// Line spacing rule
    pub line_spacing: LineSpacing,

    /// Space before each paragraph
    pub space_before: Length,

    /// Space after each paragraph
    pub space_after: Length,
}

impl StyleSheet {
    /// Create the default style sheet (Times New Roman 12 pt, double-spaced).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = name.into();
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line spacing rule.
    pub fn with_line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set space after each paragraph.
    pub fn with_space_after(mut self, space: Length) -> Self {
        self.space_after = space;
        self
    }

    /// Set space before each paragraph.
    pub fn with_space_before(mut self, space: Length) -> Self {
        self.space_before = space;
        self
    }

    /// Font size in half-points, as WordprocessingML expects.
    pub fn half_points(&self) -> u32 {
        (self.font_size * 2.0).round() as u32
    }

    /// Check that the style can serve as the document default.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidStyle("style name is empty".to_string()));
        }
        if self.font_name.trim().is_empty() {
            return Err(Error::InvalidStyle("font name is empty".to_string()));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(Error::InvalidStyle(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if self.space_before.is_negative() || self.space_after.is_negative() {
            return Err(Error::InvalidStyle(
                "paragraph spacing cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            name: "Normal".to_string(),
            font_name: "Times New Roman".to_string(),
            font_size: 12.0,
            line_spacing: LineSpacing::Double,
            space_before: Length::ZERO,
            space_after: Length::ZERO,
        }
    }
}
