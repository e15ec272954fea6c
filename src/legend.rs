//! Panel legend: ordered (dataset, style, label) entries plus appearance.

use crate::dataset::SeriesStyle;

/// One legend entry, derived from a labeled dataset or supplied explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Index of the dataset the entry refers to.
    pub dataset: usize,
    /// Style the entry is drawn with (resolved at finalize).
    pub style: SeriesStyle,
    /// Label text.
    pub label: String,
}

/// Legend of one panel.
///
/// Entries are auto-populated at finalize time from datasets that declare a
/// label, in dataset order, unless the caller set them explicitly.
#[derive(Debug, Clone)]
pub struct Legend {
    visible: bool,
    location: (f64, f64),
    char_size: f64,
    entries: Vec<LegendEntry>,
    explicit: bool,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            visible: true,
            location: (0.75, 0.8),
            char_size: 1.2,
            entries: Vec::new(),
            explicit: false,
        }
    }
}

impl Legend {
    /// Show or hide the legend.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the legend is drawn.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Anchor position in view coordinates.
    pub fn set_location(&mut self, x: f64, y: f64) {
        self.location = (x, y);
    }

    /// Anchor position in view coordinates.
    #[must_use]
    pub fn location(&self) -> (f64, f64) {
        self.location
    }

    /// Character size of the legend text.
    pub fn set_char_size(&mut self, size: f64) {
        self.char_size = size;
    }

    /// Character size of the legend text.
    #[must_use]
    pub fn char_size(&self) -> f64 {
        self.char_size
    }

    /// Replace the entries explicitly; finalize will no longer auto-populate.
    pub fn set_entries(&mut self, entries: Vec<LegendEntry>) {
        self.entries = entries;
        self.explicit = true;
    }

    /// Current entries, in order.
    #[must_use]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Whether the caller supplied the entries explicitly.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Auto-population hook used by finalize; a no-op for explicit legends.
    pub(crate) fn populate(&mut self, entries: Vec<LegendEntry>) {
        if !self.explicit {
            self.entries = entries;
        }
    }
}
