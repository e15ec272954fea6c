//! Panels: one plotting area of a page, the Grace "graph".

use log::debug;

use crate::annotation::{Annotation, LineProps, Orientation, TextProps};
use crate::axis::{AltAxis, Axis, Scale};
use crate::dataset::{Dataset, Series};
use crate::error::Result;
use crate::legend::Legend;

/// Rectangle in view (canvas) coordinates: `(xmin, ymin, xmax, ymax)`.
pub type ViewRect = (f64, f64, f64, f64);

/// One rectangular plotting area within the page grid.
///
/// Datasets are append-only; the index returned by [`Panel::plot`] stays
/// valid for the lifetime of the page and is the key the serializer and the
/// legend address the series by.
#[derive(Debug, Clone)]
pub struct Panel {
    index: usize,
    view: ViewRect,
    x: Axis,
    y: Axis,
    alt_x: Option<AltAxis>,
    alt_y: Option<AltAxis>,
    datasets: Vec<Dataset>,
    legend: Legend,
    annotations: Vec<Annotation>,
    title: Option<String>,
    subtitle: Option<String>,
}

impl Panel {
    pub(crate) fn new(index: usize, view: ViewRect) -> Self {
        Self {
            index,
            view,
            x: Axis::new(),
            y: Axis::new(),
            alt_x: None,
            alt_y: None,
            datasets: Vec::new(),
            legend: Legend::default(),
            annotations: Vec::new(),
            title: None,
            subtitle: None,
        }
    }

    /// Stable index of the panel within the page.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position of the panel on the canvas.
    #[must_use]
    pub fn view(&self) -> ViewRect {
        self.view
    }

    /// Override the panel's canvas rectangle.
    pub fn set_view(&mut self, view: ViewRect) {
        self.view = view;
    }

    /// Attach a data series and return its stable dataset index.
    ///
    /// Style resolution is deferred to finalize so the cycling order reflects
    /// the final dataset list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) when the
    /// supplied columns disagree in length.
    pub fn plot(&mut self, x: &[f64], y: &[f64], series: Series) -> Result<usize> {
        let index = self.datasets.len();
        let dataset = Dataset::from_series(index, x, y, series)?;
        debug!(
            "panel {}: dataset s{} ({} points, {:?})",
            self.index,
            index,
            dataset.len(),
            dataset.kind()
        );
        self.datasets.push(dataset);
        Ok(index)
    }

    /// Attach a plain xy series with default styling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) when
    /// `x` and `y` disagree in length.
    pub fn plot_xy(&mut self, x: &[f64], y: &[f64]) -> Result<usize> {
        self.plot(x, y, Series::new())
    }

    /// Datasets in declaration order.
    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub(crate) fn datasets_mut(&mut self) -> &mut [Dataset] {
        &mut self.datasets
    }

    /// The primary x axis.
    #[must_use]
    pub fn x_axis(&self) -> &Axis {
        &self.x
    }

    /// The primary x axis, mutable.
    pub fn x_axis_mut(&mut self) -> &mut Axis {
        &mut self.x
    }

    /// The primary y axis.
    #[must_use]
    pub fn y_axis(&self) -> &Axis {
        &self.y
    }

    /// The primary y axis, mutable.
    pub fn y_axis_mut(&mut self) -> &mut Axis {
        &mut self.y
    }

    /// Pin the x-axis limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`](crate::Error::InvalidDomain) for a
    /// non-positive bound on a logarithmic axis.
    pub fn set_xlim(&mut self, min: f64, max: f64) -> Result<()> {
        self.x.set_limits(min, max)
    }

    /// Pin the y-axis limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`](crate::Error::InvalidDomain) for a
    /// non-positive bound on a logarithmic axis.
    pub fn set_ylim(&mut self, min: f64, max: f64) -> Result<()> {
        self.y.set_limits(min, max)
    }

    /// Set the x-axis scale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`](crate::Error::InvalidDomain) when a
    /// pinned bound conflicts with a logarithmic scale.
    pub fn set_xscale(&mut self, scale: Scale) -> Result<()> {
        self.x.set_scale(scale)
    }

    /// Set the y-axis scale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`](crate::Error::InvalidDomain) when a
    /// pinned bound conflicts with a logarithmic scale.
    pub fn set_yscale(&mut self, scale: Scale) -> Result<()> {
        self.y.set_scale(scale)
    }

    /// Set the x-axis label.
    pub fn set_xlabel(&mut self, text: impl Into<String>) {
        self.x.set_label(text);
    }

    /// Set the y-axis label.
    pub fn set_ylabel(&mut self, text: impl Into<String>) {
        self.y.set_label(text);
    }

    /// Overlay break ticks on the x axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`](crate::Error::LengthMismatch) if the
    /// arrays differ in length.
    pub fn set_alt_x_breaks<S: AsRef<str>>(&mut self, positions: &[f64], labels: &[S]) -> Result<()> {
        self.alt_x = Some(AltAxis::with_breaks(positions, labels)?);
        Ok(())
    }

    /// Overlay break ticks on the y axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`](crate::Error::LengthMismatch) if the
    /// arrays differ in length.
    pub fn set_alt_y_breaks<S: AsRef<str>>(&mut self, positions: &[f64], labels: &[S]) -> Result<()> {
        self.alt_y = Some(AltAxis::with_breaks(positions, labels)?);
        Ok(())
    }

    /// The alternate x overlay, if present.
    #[must_use]
    pub fn alt_x(&self) -> Option<&AltAxis> {
        self.alt_x.as_ref()
    }

    /// The alternate y overlay, if present.
    #[must_use]
    pub fn alt_y(&self) -> Option<&AltAxis> {
        self.alt_y.as_ref()
    }

    /// The panel legend.
    #[must_use]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// The panel legend, mutable.
    pub fn legend_mut(&mut self) -> &mut Legend {
        &mut self.legend
    }

    /// Set the panel title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// The panel title, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the panel subtitle.
    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = Some(subtitle.into());
    }

    /// The panel subtitle, if set.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Add a horizontal reference line at `y`.
    pub fn axhline(&mut self, y: f64, props: LineProps) {
        self.annotations.push(Annotation::ReferenceLine {
            orientation: Orientation::Horizontal,
            value: y,
            span: None,
            props,
        });
    }

    /// Add a vertical reference line at `x`.
    pub fn axvline(&mut self, x: f64, props: LineProps) {
        self.annotations.push(Annotation::ReferenceLine {
            orientation: Orientation::Vertical,
            value: x,
            span: None,
            props,
        });
    }

    /// Add a text overlay at a world position.
    pub fn text(&mut self, content: impl Into<String>, position: (f64, f64), props: TextProps) {
        self.annotations.push(Annotation::Text {
            position,
            content: content.into(),
            props,
        });
    }

    /// Annotations in insertion order.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}
