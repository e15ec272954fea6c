//! Datasets: one named, styled data series attached to a panel.

use crate::error::{Error, Result};
use crate::style::{Color, LineStyle, Symbol};

/// Declared kind of a data series, matching the grammar's `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetKind {
    /// Plain xy series.
    #[default]
    Xy,
    /// xy series with a per-point magnitude scaling the marker size.
    XySized,
    /// xyz series (a third coordinate column).
    Xyz,
}

impl DatasetKind {
    /// Keyword used by the `type` directive.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            DatasetKind::Xy => "xy",
            DatasetKind::XySized => "xysize",
            DatasetKind::Xyz => "xyz",
        }
    }
}

/// Resolved or overridable style attributes of one series.
///
/// Unset fields are filled from the page's [`StyleRegistry`]
/// (crate::style::StyleRegistry) when the page is finalized, so the cycling
/// order reflects the final dataset list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeriesStyle {
    /// Series color; `None` resolves by cycling.
    pub color: Option<Color>,
    /// Line style; `None` resolves by cycling.
    pub line_style: Option<LineStyle>,
    /// Marker symbol; `None` resolves by cycling.
    pub symbol: Option<Symbol>,
    /// Line width; `None` resolves to the document default.
    pub line_width: Option<f64>,
    /// Scale factor applied to the per-point magnitudes of sized markers.
    pub marker_scale: Option<f64>,
}

/// Attachment descriptor handed to [`Panel::plot`](crate::panel::Panel::plot):
/// the series kind, auxiliary columns, style overrides and label.
#[derive(Debug, Clone, Default)]
pub struct Series {
    pub(crate) sizes: Option<Vec<f64>>,
    pub(crate) z: Option<Vec<f64>>,
    pub(crate) style: SeriesStyle,
    pub(crate) label: Option<String>,
    pub(crate) comment: Option<String>,
}

impl Series {
    /// A plain xy series with every style field left to the registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An xy series whose markers are scaled by per-point magnitudes.
    #[must_use]
    pub fn sized(sizes: &[f64]) -> Self {
        Self {
            sizes: Some(sizes.to_vec()),
            ..Self::default()
        }
    }

    /// An xyz series with a third coordinate column.
    #[must_use]
    pub fn xyz(z: &[f64]) -> Self {
        Self {
            z: Some(z.to_vec()),
            ..Self::default()
        }
    }

    /// Set the legend label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the provenance comment (written to the header, not rendered).
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Pin the series color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Pin the line style.
    #[must_use]
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.style.line_style = Some(style);
        self
    }

    /// Pin the marker symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.style.symbol = Some(symbol);
        self
    }

    /// Pin the line width.
    #[must_use]
    pub fn line_width(mut self, width: f64) -> Self {
        self.style.line_width = Some(width);
        self
    }

    /// Pin the marker size scale factor for sized series.
    #[must_use]
    pub fn marker_scale(mut self, scale: f64) -> Self {
        self.style.marker_scale = Some(scale);
        self
    }
}

/// One data series attached to a panel.
///
/// The index is assigned at attachment and never changes; it is the
/// cross-reference key used by the legend and by the output grammar.
#[derive(Debug, Clone)]
pub struct Dataset {
    index: usize,
    kind: DatasetKind,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    sizes: Vec<f64>,
    pub(crate) style: SeriesStyle,
    label: Option<String>,
    comment: Option<String>,
}

impl Dataset {
    /// Validate shapes and build a dataset from an attachment descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when any supplied column disagrees
    /// with the length of `x`.
    pub(crate) fn from_series(index: usize, x: &[f64], y: &[f64], series: Series) -> Result<Self> {
        let n = x.len();
        if y.len() != n {
            return Err(Error::ShapeMismatch {
                array: "y",
                expected: n,
                got: y.len(),
            });
        }
        let kind = match (&series.sizes, &series.z) {
            (Some(_), _) => DatasetKind::XySized,
            (None, Some(_)) => DatasetKind::Xyz,
            (None, None) => DatasetKind::Xy,
        };
        let sizes = series.sizes.unwrap_or_default();
        if kind == DatasetKind::XySized && sizes.len() != n {
            return Err(Error::ShapeMismatch {
                array: "sizes",
                expected: n,
                got: sizes.len(),
            });
        }
        let z = series.z.unwrap_or_default();
        if kind == DatasetKind::Xyz && z.len() != n {
            return Err(Error::ShapeMismatch {
                array: "z",
                expected: n,
                got: z.len(),
            });
        }
        Ok(Self {
            index,
            kind,
            x: x.to_vec(),
            y: y.to_vec(),
            z,
            sizes,
            style: series.style,
            label: series.label,
            comment: series.comment,
        })
    }

    /// Stable index of the dataset within its panel.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Declared series kind.
    #[must_use]
    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// Abscissa values.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Ordinate values.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Third coordinate column (empty unless the kind is `Xyz`).
    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Per-point marker magnitudes (empty unless the kind is `XySized`).
    #[must_use]
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Number of data points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Style attributes (unset fields resolve at finalize).
    #[must_use]
    pub fn style(&self) -> &SeriesStyle {
        &self.style
    }

    /// Legend label, if declared.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Provenance comment, if declared.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Marker half-width contribution of point `i`, in world units.
    fn half_width(&self, i: usize) -> f64 {
        if self.kind != DatasetKind::XySized {
            return 0.0;
        }
        let scale = self.style.marker_scale.unwrap_or(1.0);
        self.sizes.get(i).copied().unwrap_or(0.0).abs() * scale / 2.0
    }

    /// Data extent along x, expanded by sized-marker half-widths.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        self.extent(&self.x)
    }

    /// Data extent along y, expanded by sized-marker half-widths.
    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.extent(&self.y)
    }

    fn extent(&self, values: &[f64]) -> Option<(f64, f64)> {
        if values.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (i, &v) in values.iter().enumerate() {
            let half = self.half_width(i);
            min = min.min(v - half);
            max = max.max(v + half);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_xy_kind_detected() {
        let ds = Dataset::from_series(0, &[0.0, 1.0], &[2.0, 3.0], Series::new()).unwrap();
        assert_eq!(ds.kind(), DatasetKind::Xy);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_y_shape_mismatch() {
        let err = Dataset::from_series(0, &[0.0, 1.0, 2.0], &[1.0], Series::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch { array: "y", expected: 3, got: 1 }
        ));
    }

    #[test]
    fn test_sizes_shape_mismatch() {
        let err =
            Dataset::from_series(0, &[0.0, 1.0], &[1.0, 2.0], Series::sized(&[0.5])).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { array: "sizes", .. }));
    }

    #[test]
    fn test_xyz_kind_and_shape() {
        let ds =
            Dataset::from_series(0, &[0.0, 1.0], &[1.0, 2.0], Series::xyz(&[5.0, 6.0])).unwrap();
        assert_eq!(ds.kind(), DatasetKind::Xyz);
        assert!(
            Dataset::from_series(0, &[0.0, 1.0], &[1.0, 2.0], Series::xyz(&[5.0])).is_err()
        );
    }

    #[test]
    fn test_extent_plain() {
        let ds = Dataset::from_series(0, &[0.0, 2.0, 1.0], &[4.0, -1.0, 0.0], Series::new())
            .unwrap();
        assert_eq!(ds.x_extent(), Some((0.0, 2.0)));
        assert_eq!(ds.y_extent(), Some((-1.0, 4.0)));
    }

    #[test]
    fn test_extent_includes_marker_half_width() {
        let ds = Dataset::from_series(0, &[1.0, 2.0], &[0.0, 0.0], Series::sized(&[0.4, 1.0]))
            .unwrap();
        // last point: 2.0 + 1.0/2
        assert_eq!(ds.x_extent(), Some((0.8, 2.5)));
        assert_eq!(ds.y_extent(), Some((-0.5, 0.5)));
    }

    #[test]
    fn test_marker_scale_applied_to_half_width() {
        let ds = Dataset::from_series(
            0,
            &[0.0],
            &[0.0],
            Series::sized(&[1.0]).marker_scale(2.0),
        )
        .unwrap();
        assert_eq!(ds.y_extent(), Some((-1.0, 1.0)));
    }

    #[test]
    fn test_kind_keywords() {
        assert_eq!(DatasetKind::Xy.keyword(), "xy");
        assert_eq!(DatasetKind::XySized.keyword(), "xysize");
        assert_eq!(DatasetKind::Xyz.keyword(), "xyz");
    }
}
