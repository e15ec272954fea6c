//! Autoscale engine: derive axis bounds and tick spacing from plotted data.
//!
//! Runs once per finalize. For each axis whose bounds are not pinned, the
//! engine folds every dataset's extent (including sized-marker half-widths),
//! pads the range, and derives a "nice" major tick spacing. Pinned bounds and
//! caller-supplied tick layouts are never overwritten; with no datasets the
//! axis falls back to the unit range.

use log::debug;

use crate::axis::{Axis, MajorTicks, Scale};
use crate::error::{Error, Result};
use crate::panel::Panel;

/// Tuning knobs of the autoscale engine.
#[derive(Debug, Clone, Copy)]
pub struct AutoscaleOptions {
    /// Fraction of the data span added on each side (decades on log axes).
    pub padding: f64,
    /// Approximate number of major tick intervals to aim for.
    pub target_ticks: usize,
}

impl Default for AutoscaleOptions {
    fn default() -> Self {
        Self {
            padding: 0.05,
            target_ticks: 5,
        }
    }
}

/// Round `span / target` to the nearest 1/2/5 × 10^k value.
#[must_use]
pub fn nice_spacing(span: f64, target: usize) -> f64 {
    let target = target.max(1);
    let raw = span.abs() / target as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction < 1.5 {
        1.0
    } else if fraction < 3.5 {
        2.0
    } else if fraction < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

enum Dimension {
    X,
    Y,
}

/// Resolve limits and tick spacing for both axes of `panel`.
///
/// # Errors
///
/// Returns [`Error::InvalidDomain`] when a logarithmic axis receives
/// non-positive data.
pub fn autoscale_panel(panel: &mut Panel, options: &AutoscaleOptions) -> Result<()> {
    let x_extent = fold_extents(panel, &Dimension::X);
    let y_extent = fold_extents(panel, &Dimension::Y);
    let index = panel.index();
    resolve_axis(panel.x_axis_mut(), x_extent, options)?;
    resolve_axis(panel.y_axis_mut(), y_extent, options)?;
    debug!(
        "panel {}: world x {:?}, y {:?}",
        index,
        panel.x_axis().limits(),
        panel.y_axis().limits()
    );
    Ok(())
}

fn fold_extents(panel: &Panel, dim: &Dimension) -> Option<(f64, f64)> {
    let mut folded: Option<(f64, f64)> = None;
    for dataset in panel.datasets() {
        let extent = match dim {
            Dimension::X => dataset.x_extent(),
            Dimension::Y => dataset.y_extent(),
        };
        if let Some((lo, hi)) = extent {
            folded = Some(match folded {
                Some((a, b)) => (a.min(lo), b.max(hi)),
                None => (lo, hi),
            });
        }
    }
    folded
}

fn resolve_axis(
    axis: &mut Axis,
    data_extent: Option<(f64, f64)>,
    options: &AutoscaleOptions,
) -> Result<()> {
    let (explicit_min, explicit_max) = axis.explicit_limits();

    let (min, max) = if let (Some(lo), Some(hi)) = (explicit_min, explicit_max) {
        // limits fully pinned, nothing to derive
        (lo, hi)
    } else {
        let (data_min, data_max) = data_extent.unwrap_or((0.0, 1.0));
        let (padded_min, padded_max) = match axis.scale() {
            Scale::Logarithmic => pad_logarithmic(data_min, data_max, options.padding)?,
            Scale::Linear | Scale::Reciprocal => pad_linear(data_min, data_max, options.padding),
        };
        (
            explicit_min.unwrap_or(padded_min),
            explicit_max.unwrap_or(padded_max),
        )
    };

    axis.resolved = Some((min, max));
    if matches!(axis.major_ticks(), MajorTicks::Auto) {
        let spacing = match axis.scale() {
            // whole decades on log axes
            Scale::Logarithmic => decade_spacing(min, max, options.target_ticks),
            Scale::Linear | Scale::Reciprocal => nice_spacing(max - min, options.target_ticks),
        };
        axis.resolved_spacing = Some(spacing);
    }
    Ok(())
}

fn pad_linear(min: f64, max: f64, ratio: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        let pad = span * ratio;
        (min - pad, max + pad)
    } else {
        // constant data still needs a visible range
        let epsilon = min.abs().max(1.0) * ratio.max(f64::EPSILON);
        (min - epsilon, max + epsilon)
    }
}

fn pad_logarithmic(min: f64, max: f64, ratio: f64) -> Result<(f64, f64)> {
    if min <= 0.0 {
        return Err(Error::InvalidDomain { value: min });
    }
    let log_min = min.log10();
    let log_max = max.log10();
    let decades = log_max - log_min;
    let pad = if decades > 0.0 {
        decades * ratio
    } else {
        ratio.max(f64::EPSILON)
    };
    Ok((10f64.powf(log_min - pad), 10f64.powf(log_max + pad)))
}

fn decade_spacing(min: f64, max: f64, target: usize) -> f64 {
    let decades = (max.log10() - min.log10()).abs();
    nice_spacing(decades.max(1.0), target).max(1.0)
}
