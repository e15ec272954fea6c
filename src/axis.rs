//! Axis configuration: scale, limits, ticks, grid and labels.
//!
//! An [`Axis`] starts fully automatic: limits and major tick spacing are
//! derived from the plotted data at finalize time. Every explicit setter pins
//! its value permanently; the autoscale engine never overwrites a pinned
//! bound or a caller-supplied tick layout. Validation is fail-fast: the call
//! that introduces an inconsistency reports it.

use crate::error::{Error, Result};
use crate::style::{Color, LineStyle};

/// Coordinate scale of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    /// Linear mapping (Grace `Normal`).
    #[default]
    Linear,
    /// Base-10 logarithmic mapping.
    Logarithmic,
    /// Reciprocal mapping.
    Reciprocal,
}

impl Scale {
    /// Keyword used by the `axes scale` directive.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Scale::Linear => "Normal",
            Scale::Logarithmic => "Logarithmic",
            Scale::Reciprocal => "Reciprocal",
        }
    }
}

/// Major tick layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MajorTicks {
    /// Spacing chosen by the autoscale engine.
    #[default]
    Auto,
    /// Fixed spacing between major ticks.
    Spacing(f64),
    /// Explicit tick positions.
    Positions(Vec<f64>),
}

/// One tick at an explicit position carrying an explicit label.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialTick {
    /// World coordinate of the tick.
    pub position: f64,
    /// Label text (builder markup, encoded at serialization).
    pub label: String,
}

/// Grid lines drawn at major ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Whether grid lines are drawn.
    pub on: bool,
    /// Line style of the grid.
    pub style: LineStyle,
    /// Line width of the grid.
    pub width: f64,
    /// Color of the grid lines.
    pub color: Color,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            on: false,
            style: LineStyle::Dotted,
            width: 1.0,
            color: Color::Black,
        }
    }
}

/// One coordinate dimension of a panel.
#[derive(Debug, Clone, Default)]
pub struct Axis {
    scale: Scale,
    min: Option<f64>,
    max: Option<f64>,
    /// World bounds written by the autoscale engine (or copied from the
    /// explicit bounds) at finalize time.
    pub(crate) resolved: Option<(f64, f64)>,
    major: MajorTicks,
    /// Major spacing derived by the autoscale engine when `major` is `Auto`.
    pub(crate) resolved_spacing: Option<f64>,
    minor_count: u32,
    grid: Grid,
    special: Vec<SpecialTick>,
    label: Option<String>,
    tick_labels_visible: bool,
}

impl Axis {
    /// Create an automatic linear axis with visible tick labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            minor_count: 1,
            tick_labels_visible: true,
            ..Self::default()
        }
    }

    /// Set the coordinate scale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] when switching to a logarithmic scale
    /// while a non-positive bound is already pinned.
    pub fn set_scale(&mut self, scale: Scale) -> Result<()> {
        if scale == Scale::Logarithmic {
            for bound in [self.min, self.max].into_iter().flatten() {
                if bound <= 0.0 {
                    return Err(Error::InvalidDomain { value: bound });
                }
            }
        }
        self.scale = scale;
        Ok(())
    }

    /// The coordinate scale.
    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Pin both bounds, permanently overriding autoscale for this axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] for a non-positive bound on a
    /// logarithmic axis.
    pub fn set_limits(&mut self, min: f64, max: f64) -> Result<()> {
        self.check_bound(min)?;
        self.check_bound(max)?;
        self.min = Some(min);
        self.max = Some(max);
        Ok(())
    }

    /// Pin the lower bound only; autoscale fills the upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] for a non-positive value on a
    /// logarithmic axis.
    pub fn set_min(&mut self, min: f64) -> Result<()> {
        self.check_bound(min)?;
        self.min = Some(min);
        Ok(())
    }

    /// Pin the upper bound only; autoscale fills the lower bound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] for a non-positive value on a
    /// logarithmic axis.
    pub fn set_max(&mut self, max: f64) -> Result<()> {
        self.check_bound(max)?;
        self.max = Some(max);
        Ok(())
    }

    fn check_bound(&self, value: f64) -> Result<()> {
        if self.scale == Scale::Logarithmic && value <= 0.0 {
            return Err(Error::InvalidDomain { value });
        }
        Ok(())
    }

    /// Explicitly pinned bounds, if any.
    #[must_use]
    pub fn explicit_limits(&self) -> (Option<f64>, Option<f64>) {
        (self.min, self.max)
    }

    /// World bounds after finalize; `None` before the page is finalized
    /// unless both bounds were pinned.
    #[must_use]
    pub fn limits(&self) -> Option<(f64, f64)> {
        if let Some(resolved) = self.resolved {
            return Some(resolved);
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Use a fixed distance between major ticks.
    pub fn set_major_spacing(&mut self, spacing: f64) {
        self.major = MajorTicks::Spacing(spacing);
    }

    /// Place major ticks at explicit positions.
    pub fn set_major_positions(&mut self, positions: Vec<f64>) {
        self.major = MajorTicks::Positions(positions);
    }

    /// The major tick layout.
    #[must_use]
    pub fn major_ticks(&self) -> &MajorTicks {
        &self.major
    }

    /// Major spacing the serializer will emit, if one is known.
    #[must_use]
    pub(crate) fn effective_spacing(&self) -> Option<f64> {
        match &self.major {
            MajorTicks::Spacing(s) => Some(*s),
            MajorTicks::Auto => self.resolved_spacing,
            MajorTicks::Positions(_) => None,
        }
    }

    /// Number of minor ticks between major ticks.
    pub fn set_minor_count(&mut self, count: u32) {
        self.minor_count = count;
    }

    /// Number of minor ticks between major ticks.
    #[must_use]
    pub fn minor_count(&self) -> u32 {
        self.minor_count
    }

    /// Switch major grid lines on or off.
    pub fn set_grid(&mut self, on: bool) {
        self.grid.on = on;
    }

    /// Configure major grid appearance and switch the grid on.
    pub fn set_grid_style(&mut self, style: LineStyle, width: f64, color: Color) {
        self.grid = Grid {
            on: true,
            style,
            width,
            color,
        };
    }

    /// Grid configuration.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Attach explicitly positioned, explicitly labeled ticks.
    ///
    /// Positions and labels are parallel arrays; order is preserved in the
    /// output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the arrays differ in length, and
    /// [`Error::InvalidDomain`] for a non-positive position on a logarithmic
    /// axis.
    pub fn set_special<S: AsRef<str>>(&mut self, positions: &[f64], labels: &[S]) -> Result<()> {
        if positions.len() != labels.len() {
            return Err(Error::LengthMismatch {
                positions: positions.len(),
                labels: labels.len(),
            });
        }
        for &p in positions {
            self.check_bound(p)?;
        }
        self.special = positions
            .iter()
            .zip(labels)
            .map(|(&position, label)| SpecialTick {
                position,
                label: label.as_ref().to_string(),
            })
            .collect();
        Ok(())
    }

    /// The special ticks in insertion order.
    #[must_use]
    pub fn special_ticks(&self) -> &[SpecialTick] {
        &self.special
    }

    /// Set the axis label.
    pub fn set_label(&mut self, text: impl Into<String>) {
        self.label = Some(text.into());
    }

    /// The axis label, if set.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Show or hide the numeric tick labels.
    pub fn set_tick_labels_visible(&mut self, visible: bool) {
        self.tick_labels_visible = visible;
    }

    /// Whether numeric tick labels are drawn.
    #[must_use]
    pub fn tick_labels_visible(&self) -> bool {
        self.tick_labels_visible
    }
}

/// Secondary tick overlay sharing a panel's spatial extent.
///
/// Alternate axes carry no scale of their own; they exist to mark coordinate
/// discontinuities (breaks) on top of the primary axis, e.g. where two path
/// segments of a band-structure abscissa are not numerically contiguous.
#[derive(Debug, Clone, Default)]
pub struct AltAxis {
    ticks: Vec<SpecialTick>,
}

impl AltAxis {
    /// Create an overlay from break positions and labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the arrays differ in length.
    pub fn with_breaks<S: AsRef<str>>(positions: &[f64], labels: &[S]) -> Result<Self> {
        if positions.len() != labels.len() {
            return Err(Error::LengthMismatch {
                positions: positions.len(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            ticks: positions
                .iter()
                .zip(labels)
                .map(|(&position, label)| SpecialTick {
                    position,
                    label: label.as_ref().to_string(),
                })
                .collect(),
        })
    }

    /// The break ticks in insertion order.
    #[must_use]
    pub fn ticks(&self) -> &[SpecialTick] {
        &self.ticks
    }
}
