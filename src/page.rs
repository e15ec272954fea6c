//! Pages: the top-level document container and finalize orchestration.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::autoscale::{autoscale_panel, AutoscaleOptions};
use crate::error::{Error, Result};
use crate::legend::LegendEntry;
use crate::panel::{Panel, ViewRect};
use crate::serializer::Serializer;
use crate::style::StyleRegistry;

/// Canvas region available to panels, in view coordinates:
/// `(xmin, ymin, xmax, ymax)` for a landscape letter page.
const CANVAS: ViewRect = (0.15, 0.10, 1.20, 0.85);

/// Default page size in points (landscape letter).
const DEFAULT_SIZE: (u32, u32) = (792, 612);

/// Grid factory parameters.
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Number of panel rows.
    pub rows: usize,
    /// Number of panel columns.
    pub cols: usize,
    /// Horizontal gap between adjacent columns, in view units.
    pub hgap: f64,
    /// Vertical gap between adjacent rows, in view units.
    pub vgap: f64,
    /// Relative column widths; `None` for equal columns.
    pub width_ratios: Option<Vec<f64>>,
    /// Relative row heights; `None` for equal rows.
    pub height_ratios: Option<Vec<f64>>,
}

impl GridOptions {
    /// Equal-sized grid with the stock gaps.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            hgap: 0.02,
            vgap: 0.02,
            width_ratios: None,
            height_ratios: None,
        }
    }
}

/// The document under construction: page geometry, a grid of panels, shared
/// metadata and the style registry.
///
/// A page lives for one document build; panels are created with the page and
/// registries are never shared between pages.
#[derive(Debug, Clone)]
pub struct Page {
    size: (u32, u32),
    rows: usize,
    cols: usize,
    description: Option<String>,
    panels: Vec<Panel>,
    registry: StyleRegistry,
    autoscale: AutoscaleOptions,
    require_data: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// A page with a single panel spanning the whole canvas.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            rows: 1,
            cols: 1,
            description: None,
            panels: vec![Panel::new(0, CANVAS)],
            registry: StyleRegistry::new(),
            autoscale: AutoscaleOptions::default(),
            require_data: false,
        }
    }

    /// A page with a `rows` × `cols` grid of panels.
    ///
    /// Panels are laid out row-major from the top-left corner; each panel's
    /// grid position is unique and inside the canvas by construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] for an empty grid or ratio lists that
    /// disagree with the grid shape.
    pub fn with_grid(options: GridOptions) -> Result<Self> {
        let views = layout_views(&options)?;
        let panels = views
            .into_iter()
            .enumerate()
            .map(|(index, view)| Panel::new(index, view))
            .collect();
        Ok(Self {
            size: DEFAULT_SIZE,
            rows: options.rows,
            cols: options.cols,
            description: None,
            panels,
            registry: StyleRegistry::new(),
            autoscale: AutoscaleOptions::default(),
            require_data: false,
        })
    }

    /// Page size in points.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Override the page size in points.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// Grid shape `(rows, cols)`.
    #[must_use]
    pub fn grid(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Set the free-text document description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// The document description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Panels in index order.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Panel by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; panel count is fixed at creation.
    #[must_use]
    pub fn panel(&self, index: usize) -> &Panel {
        &self.panels[index]
    }

    /// Panel by index, mutable.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; panel count is fixed at creation.
    pub fn panel_mut(&mut self, index: usize) -> &mut Panel {
        &mut self.panels[index]
    }

    /// The style registry owned by this page.
    #[must_use]
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// The style registry, mutable (for custom cycling lists).
    pub fn registry_mut(&mut self) -> &mut StyleRegistry {
        &mut self.registry
    }

    /// Tune the autoscale engine.
    pub fn set_autoscale_options(&mut self, options: AutoscaleOptions) {
        self.autoscale = options;
    }

    /// Require at least one dataset per panel at finalize time.
    pub fn require_data(&mut self, required: bool) {
        self.require_data = required;
    }

    /// Run autoscale, resolve unset styles and populate legends.
    ///
    /// Idempotent: a second call on an unchanged page is a no-op because all
    /// style fields are already resolved and autoscale recomputes identical
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPanel`] when data is required and a panel has
    /// none, or [`Error::InvalidDomain`] from autoscale on logarithmic axes.
    pub fn finalize(&mut self) -> Result<()> {
        if self.require_data {
            if let Some(empty) = self.panels.iter().find(|p| p.datasets().is_empty()) {
                return Err(Error::EmptyPanel {
                    panel: empty.index(),
                });
            }
        }
        for panel in &mut self.panels {
            autoscale_panel(panel, &self.autoscale)?;

            let panel_index = panel.index();
            for dataset in panel.datasets_mut() {
                let style = &mut dataset.style;
                style.color = Some(self.registry.resolve_color(panel_index, style.color));
                style.line_style =
                    Some(self.registry.resolve_line_style(panel_index, style.line_style));
                style.symbol = Some(self.registry.resolve_symbol(panel_index, style.symbol));
                style.line_width.get_or_insert(1.5);
                style.marker_scale.get_or_insert(1.0);
            }

            let entries: Vec<LegendEntry> = panel
                .datasets()
                .iter()
                .filter_map(|ds| {
                    ds.label().map(|label| LegendEntry {
                        dataset: ds.index(),
                        style: *ds.style(),
                        label: label.to_string(),
                    })
                })
                .collect();
            panel.legend_mut().populate(entries);
            debug!(
                "panel {}: finalized {} datasets, {} legend entries",
                panel_index,
                panel.datasets().len(),
                panel.legend().entries().len()
            );
        }
        Ok(())
    }

    /// Finalize and serialize with the default serializer.
    ///
    /// # Errors
    ///
    /// Propagates any [`Page::finalize`] error.
    pub fn render(&mut self) -> Result<String> {
        self.render_with(&Serializer::new())
    }

    /// Finalize and serialize with a configured serializer.
    ///
    /// # Errors
    ///
    /// Propagates any [`Page::finalize`] error.
    pub fn render_with(&mut self, serializer: &Serializer) -> Result<String> {
        self.finalize()?;
        Ok(serializer.serialize(self))
    }

    /// Finalize, serialize and write the document to a sink.
    ///
    /// # Errors
    ///
    /// Propagates finalize errors and sink write failures.
    pub fn write_to<W: Write>(&mut self, sink: &mut W) -> Result<()> {
        let document = self.render()?;
        sink.write_all(document.as_bytes())?;
        Ok(())
    }

    /// Finalize, serialize and atomically write the document to `path`.
    ///
    /// The document is written to a temporary file in the target directory
    /// and renamed over `path` on success, so a failure never leaves a
    /// partially-written document behind.
    ///
    /// # Errors
    ///
    /// Propagates finalize errors and filesystem failures.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.save_with(path, &Serializer::new())
    }

    /// Like [`Page::save`] with a configured serializer.
    ///
    /// # Errors
    ///
    /// Propagates finalize errors and filesystem failures.
    pub fn save_with<P: AsRef<Path>>(&mut self, path: P, serializer: &Serializer) -> Result<()> {
        let path = path.as_ref();
        let document = self.render_with(serializer)?;
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                NamedTempFile::new_in(dir)?
            }
            None => NamedTempFile::new_in(".")?,
        };
        tmp.write_all(document.as_bytes())?;
        tmp.persist(path).map_err(|e| Error::Io(e.error))?;
        info!("wrote grace document to {}", path.display());
        Ok(())
    }
}

fn layout_views(options: &GridOptions) -> Result<Vec<ViewRect>> {
    let GridOptions {
        rows,
        cols,
        hgap,
        vgap,
        width_ratios,
        height_ratios,
    } = options;
    let (rows, cols) = (*rows, *cols);
    if rows == 0 || cols == 0 {
        return Err(Error::ShapeMismatch {
            array: "grid",
            expected: 1,
            got: 0,
        });
    }
    let (xmin, ymin, xmax, ymax) = CANVAS;
    let total_width = xmax - xmin - hgap * (cols as f64 - 1.0);
    let total_height = ymax - ymin - vgap * (rows as f64 - 1.0);

    let widths = split(total_width, cols, width_ratios.as_deref(), "width_ratios")?;
    let heights = split(total_height, rows, height_ratios.as_deref(), "height_ratios")?;

    let mut views = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let top = ymax - vgap * row as f64 - heights[..row].iter().sum::<f64>();
        for col in 0..cols {
            let left = xmin + hgap * col as f64 + widths[..col].iter().sum::<f64>();
            views.push((left, top - heights[row], left + widths[col], top));
        }
    }
    Ok(views)
}

fn split(
    total: f64,
    count: usize,
    ratios: Option<&[f64]>,
    array: &'static str,
) -> Result<Vec<f64>> {
    match ratios {
        None => Ok(vec![total / count as f64; count]),
        Some(ratios) => {
            if ratios.len() != count {
                return Err(Error::ShapeMismatch {
                    array,
                    expected: count,
                    got: ratios.len(),
                });
            }
            let sum: f64 = ratios.iter().sum();
            Ok(ratios.iter().map(|r| r * total / sum).collect())
        }
    }
}
