//! Style enumerations and the per-page style registry.
//!
//! Grace addresses colors, line styles and symbols by small integer codes.
//! The enums here give those codes safe names; [`StyleRegistry`] owns the
//! ordered cycling lists and the per-panel cursors that hand out the next
//! unused value whenever a dataset leaves a style field unset.

use crate::error::{Error, Result};

/// The sixteen colors of the stock Grace color map, in map order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Map index 0, background.
    White,
    /// Map index 1.
    Black,
    /// Map index 2.
    Red,
    /// Map index 3.
    Green,
    /// Map index 4.
    Blue,
    /// Map index 5.
    Yellow,
    /// Map index 6.
    Brown,
    /// Map index 7.
    Grey,
    /// Map index 8.
    Violet,
    /// Map index 9.
    Cyan,
    /// Map index 10.
    Magenta,
    /// Map index 11.
    Orange,
    /// Map index 12.
    Indigo,
    /// Map index 13.
    Maroon,
    /// Map index 14.
    Turquoise,
    /// Map index 15.
    Green4,
}

impl Color {
    /// All colors in Grace map order.
    pub const ALL: [Color; 16] = [
        Color::White,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Brown,
        Color::Grey,
        Color::Violet,
        Color::Cyan,
        Color::Magenta,
        Color::Orange,
        Color::Indigo,
        Color::Maroon,
        Color::Turquoise,
        Color::Green4,
    ];

    /// Integer code used in the output grammar.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Name as it appears in the document color map.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Brown => "brown",
            Color::Grey => "grey",
            Color::Violet => "violet",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Orange => "orange",
            Color::Indigo => "indigo",
            Color::Maroon => "maroon",
            Color::Turquoise => "turquoise",
            Color::Green4 => "green4",
        }
    }

    /// RGB triple written into the document color map.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::White => (255, 255, 255),
            Color::Black => (0, 0, 0),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Blue => (0, 0, 255),
            Color::Yellow => (255, 255, 0),
            Color::Brown => (188, 143, 143),
            Color::Grey => (220, 220, 220),
            Color::Violet => (148, 0, 211),
            Color::Cyan => (0, 255, 255),
            Color::Magenta => (255, 0, 255),
            Color::Orange => (255, 165, 0),
            Color::Indigo => (114, 33, 188),
            Color::Maroon => (103, 7, 72),
            Color::Turquoise => (64, 224, 208),
            Color::Green4 => (0, 139, 0),
        }
    }

    /// Look up a color by map index, failing fast on out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] if `index` is not in the color map.
    pub fn from_index(index: usize) -> Result<Self> {
        Color::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::InvalidStyle {
                category: "color",
                value: index.to_string(),
            })
    }

    /// Look up a color by name or single-letter alias (`"k"`, `"r"`, …).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self> {
        let canonical = match name {
            "w" => "white",
            "k" => "black",
            "r" => "red",
            "g" => "green",
            "b" => "blue",
            "y" => "yellow",
            "e" | "gray" => "grey",
            other => other,
        };
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.name() == canonical)
            .ok_or_else(|| Error::InvalidStyle {
                category: "color",
                value: name.to_string(),
            })
    }
}

/// Line style codes of the Grace grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// No line.
    None,
    /// Solid line (code 1).
    Solid,
    /// Dotted line (code 2).
    Dotted,
    /// Dashed line (code 3).
    Dashed,
    /// Long-dashed line (code 4).
    LongDashed,
    /// Dot-dashed line (code 5).
    DotDashed,
}

impl LineStyle {
    /// Integer code used in the output grammar.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a line style by name or shorthand (`"-"`, `"--"`, `":"`, `".-"`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "none" => Ok(LineStyle::None),
            "solid" | "-" => Ok(LineStyle::Solid),
            "dotted" | ":" | ".." => Ok(LineStyle::Dotted),
            "dashed" | "--" => Ok(LineStyle::Dashed),
            "longdashed" | "---" => Ok(LineStyle::LongDashed),
            "dotdashed" | ".-" => Ok(LineStyle::DotDashed),
            other => Err(Error::InvalidStyle {
                category: "line style",
                value: other.to_string(),
            }),
        }
    }
}

/// Marker symbol codes of the Grace grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// No marker.
    None,
    /// Circle (code 1).
    Circle,
    /// Square (code 2).
    Square,
    /// Diamond (code 3).
    Diamond,
    /// Upward triangle (code 4).
    TriangleUp,
    /// Leftward triangle (code 5).
    TriangleLeft,
    /// Downward triangle (code 6).
    TriangleDown,
    /// Rightward triangle (code 7).
    TriangleRight,
    /// Plus sign (code 8).
    Plus,
    /// Diagonal cross (code 9).
    Cross,
    /// Star (code 10).
    Star,
}

impl Symbol {
    /// Integer code used in the output grammar.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a symbol by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "none" => Ok(Symbol::None),
            "circle" | "o" => Ok(Symbol::Circle),
            "square" => Ok(Symbol::Square),
            "diamond" => Ok(Symbol::Diamond),
            "triangle-up" | "^" => Ok(Symbol::TriangleUp),
            "triangle-left" | "<" => Ok(Symbol::TriangleLeft),
            "triangle-down" | "v" => Ok(Symbol::TriangleDown),
            "triangle-right" | ">" => Ok(Symbol::TriangleRight),
            "plus" | "+" => Ok(Symbol::Plus),
            "cross" | "x" => Ok(Symbol::Cross),
            "star" | "*" => Ok(Symbol::Star),
            other => Err(Error::InvalidStyle {
                category: "symbol",
                value: other.to_string(),
            }),
        }
    }
}

/// Per-panel cycling cursors, one per style category.
#[derive(Debug, Clone, Copy, Default)]
struct PanelCursor {
    color: usize,
    line_style: usize,
    symbol: usize,
}

/// Ordered style catalogs plus the deterministic auto-cycling state.
///
/// A registry is owned by exactly one [`Page`](crate::page::Page); cursors
/// advance once per resolved field, so the assignment sequence is a pure
/// function of the build-call order.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    palette: Vec<Color>,
    line_styles: Vec<LineStyle>,
    symbols: Vec<Symbol>,
    cursors: Vec<PanelCursor>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistry {
    /// Create a registry with the stock cycling lists.
    ///
    /// The default palette is the Grace color map without white, the default
    /// line-style and symbol lists hold a single entry each (solid, no
    /// marker), so by default only colors visibly rotate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: Color::ALL[1..].to_vec(),
            line_styles: vec![LineStyle::Solid],
            symbols: vec![Symbol::None],
            cursors: Vec::new(),
        }
    }

    /// Replace the color cycling order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] if `palette` is empty.
    pub fn set_palette(&mut self, palette: Vec<Color>) -> Result<()> {
        if palette.is_empty() {
            return Err(Error::InvalidStyle {
                category: "color",
                value: "empty palette".to_string(),
            });
        }
        self.palette = palette;
        Ok(())
    }

    /// Replace the line-style cycling order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] if `styles` is empty.
    pub fn set_line_styles(&mut self, styles: Vec<LineStyle>) -> Result<()> {
        if styles.is_empty() {
            return Err(Error::InvalidStyle {
                category: "line style",
                value: "empty list".to_string(),
            });
        }
        self.line_styles = styles;
        Ok(())
    }

    /// Replace the symbol cycling order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] if `symbols` is empty.
    pub fn set_symbols(&mut self, symbols: Vec<Symbol>) -> Result<()> {
        if symbols.is_empty() {
            return Err(Error::InvalidStyle {
                category: "symbol",
                value: "empty list".to_string(),
            });
        }
        self.symbols = symbols;
        Ok(())
    }

    /// The color cycling order.
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    fn cursor(&mut self, panel: usize) -> &mut PanelCursor {
        if panel >= self.cursors.len() {
            self.cursors.resize(panel + 1, PanelCursor::default());
        }
        &mut self.cursors[panel]
    }

    /// Next color for `panel`, wrapping around the palette.
    pub fn next_color(&mut self, panel: usize) -> Color {
        let len = self.palette.len();
        let cursor = self.cursor(panel);
        let value = cursor.color;
        cursor.color += 1;
        self.palette[value % len]
    }

    /// Next line style for `panel`.
    pub fn next_line_style(&mut self, panel: usize) -> LineStyle {
        let len = self.line_styles.len();
        let cursor = self.cursor(panel);
        let value = cursor.line_style;
        cursor.line_style += 1;
        self.line_styles[value % len]
    }

    /// Next symbol for `panel`.
    pub fn next_symbol(&mut self, panel: usize) -> Symbol {
        let len = self.symbols.len();
        let cursor = self.cursor(panel);
        let value = cursor.symbol;
        cursor.symbol += 1;
        self.symbols[value % len]
    }

    /// Return `explicit` unchanged, or the next cycled color.
    pub fn resolve_color(&mut self, panel: usize, explicit: Option<Color>) -> Color {
        explicit.unwrap_or_else(|| self.next_color(panel))
    }

    /// Return `explicit` unchanged, or the next cycled line style.
    pub fn resolve_line_style(&mut self, panel: usize, explicit: Option<LineStyle>) -> LineStyle {
        explicit.unwrap_or_else(|| self.next_line_style(panel))
    }

    /// Return `explicit` unchanged, or the next cycled symbol.
    pub fn resolve_symbol(&mut self, panel: usize, explicit: Option<Symbol>) -> Symbol {
        explicit.unwrap_or_else(|| self.next_symbol(panel))
    }
}
