//! Annotation overlays: reference lines and free text.

use crate::style::{Color, LineStyle};

/// Orientation of a reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Constant-y line across the panel.
    Horizontal,
    /// Constant-x line across the panel.
    Vertical,
}

/// Appearance of an annotation line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineProps {
    /// Line color.
    pub color: Color,
    /// Line style.
    pub style: LineStyle,
    /// Line width.
    pub width: f64,
}

impl Default for LineProps {
    fn default() -> Self {
        Self {
            color: Color::Black,
            style: LineStyle::Dashed,
            width: 1.0,
        }
    }
}

/// Appearance of an annotation text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextProps {
    /// Text color.
    pub color: Color,
    /// Character size.
    pub char_size: f64,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            color: Color::Black,
            char_size: 1.0,
        }
    }
}

/// A drawing-object overlay attached to one panel, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// Straight line at a constant coordinate, optionally limited to a span
    /// on the other axis (otherwise it runs across the full panel extent).
    ReferenceLine {
        /// Which coordinate is held constant.
        orientation: Orientation,
        /// The constant coordinate value.
        value: f64,
        /// Optional span on the crossing axis.
        span: Option<(f64, f64)>,
        /// Line appearance.
        props: LineProps,
    },
    /// Free text placed at a world position.
    Text {
        /// World position of the text anchor.
        position: (f64, f64),
        /// Content (builder markup, encoded at serialization).
        content: String,
        /// Text appearance.
        props: TextProps,
    },
}
