//! # agrdoc
//!
//! Programmatic builder and text serializer for Grace (xmgrace) plot
//! documents.
//!
//! agrdoc assembles multi-panel 2D plot documents in memory and emits the
//! ASCII project-file grammar consumed by the Grace plotting application:
//! a directive header, per-graph configuration blocks, drawing objects and
//! whitespace-separated data sections. The builder owns autoscaling, style
//! cycling and text markup encoding so a document is publication-ready
//! without touching raw directives.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use agrdoc::prelude::*;
//!
//! let mut page = Page::new();
//! page.panel_mut(0).plot_xy(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])?;
//! page.panel_mut(0).set_xlabel("Energy (eV)");
//! page.save("figure.agr")?;
//! ```
//!
//! ## Design
//!
//! - **Fail fast**: every setter and attachment validates its input and
//!   reports the offending call; nothing is deferred to serialization.
//! - **Pure serialization**: the serializer is a pure function of a
//!   finalized [`page::Page`], so identical documents are byte-identical.
//! - **External rasterization**: image export delegates to the `gracebat`
//!   binary through [`raster`]; the crate itself never draws pixels.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in numeric/layout code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

/// Annotation overlays (reference lines, free text).
pub mod annotation;

/// Automatic axis bounds and tick spacing.
pub mod autoscale;

/// Axis configuration: scale, limits, ticks, grid, labels.
pub mod axis;

/// Data series and their per-series styles.
pub mod dataset;

/// Grace text markup encoding.
pub mod encode;

/// Error and result types.
pub mod error;

/// Legend entries and appearance.
pub mod legend;

/// Page container, grid layout and finalize orchestration.
pub mod page;

/// One graph: axes, datasets, legend, annotations.
pub mod panel;

/// Hardcopy export via the external `gracebat` engine.
pub mod raster;

/// Project-file text emission.
pub mod serializer;

/// Colors, line styles, symbols and the cycling registry.
pub mod style;

/// Commonly used types.
pub mod prelude {
    pub use crate::annotation::{Annotation, LineProps, Orientation, TextProps};
    pub use crate::autoscale::AutoscaleOptions;
    pub use crate::axis::{AltAxis, Axis, MajorTicks, Scale};
    pub use crate::dataset::{Dataset, DatasetKind, Series, SeriesStyle};
    pub use crate::error::{Error, Result};
    pub use crate::legend::{Legend, LegendEntry};
    pub use crate::page::{GridOptions, Page};
    pub use crate::panel::Panel;
    pub use crate::serializer::Serializer;
    pub use crate::style::{Color, LineStyle, StyleRegistry, Symbol};
}

pub use error::{Error, Result};
