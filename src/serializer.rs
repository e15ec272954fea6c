//! Text serialization of a finalized page into the Grace project grammar.
//!
//! Serialization is a pure function of the page: it mutates nothing, so the
//! same page always produces byte-identical output. Finalize first (via
//! [`Page::render`](crate::page::Page::render) or explicitly) so resolved
//! bounds and styles are present; unresolved axes fall back to the unit world
//! and unresolved styles to the grammar defaults.

use std::fmt::Write;

use log::debug;

use crate::annotation::{Annotation, Orientation};
use crate::axis::{Axis, MajorTicks};
use crate::dataset::{Dataset, DatasetKind};
use crate::encode::encode;
use crate::page::Page;
use crate::panel::Panel;
use crate::style::{Color, LineStyle, Symbol};

/// PostScript fonts of the document font map, in code order.
const FONTS: [&str; 14] = [
    "Times-Roman",
    "Times-Italic",
    "Times-Bold",
    "Times-BoldItalic",
    "Helvetica",
    "Helvetica-Oblique",
    "Helvetica-Bold",
    "Helvetica-BoldOblique",
    "Courier",
    "Courier-Oblique",
    "Courier-Bold",
    "Courier-BoldOblique",
    "Symbol",
    "ZapfDingbats",
];

/// Emits the ASCII project-file text for a page.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    precision: usize,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    /// Serializer with the stock decimal precision (6).
    #[must_use]
    pub fn new() -> Self {
        Self { precision: 6 }
    }

    /// Serializer with a custom decimal precision for all numeric output.
    #[must_use]
    pub fn with_precision(precision: usize) -> Self {
        Self { precision }
    }

    /// The configured decimal precision.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    fn num(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    /// Produce the complete document text.
    #[must_use]
    pub fn serialize(&self, page: &Page) -> String {
        let mut out = String::new();
        self.header(&mut out, page);
        for panel in page.panels() {
            self.graph_block(&mut out, panel);
        }
        for panel in page.panels() {
            self.drawing_objects(&mut out, panel);
        }
        for panel in page.panels() {
            self.data_sections(&mut out, panel);
        }
        debug!(
            "serialized {} panels into {} bytes",
            page.panels().len(),
            out.len()
        );
        out
    }

    fn header(&self, out: &mut String, page: &Page) {
        out.push_str("# Grace project file\n#\n");
        out.push_str("@version 50122\n");
        out.push_str("@link page off\n");
        let (width, height) = page.size();
        let _ = writeln!(out, "@page size {width}, {height}");
        out.push_str("@background color 0\n");
        if let Some(description) = page.description() {
            let _ = writeln!(out, "@description \"{}\"", encode(description));
        }
        for (code, font) in FONTS.iter().enumerate() {
            let _ = writeln!(out, "@map font {code} to \"{font}\", \"{font}\"");
        }
        for color in Color::ALL {
            let (r, g, b) = color.rgb();
            let _ = writeln!(
                out,
                "@map color {} to ({r}, {g}, {b}), \"{}\"",
                color.code(),
                color.name()
            );
        }
    }

    fn graph_block(&self, out: &mut String, panel: &Panel) {
        let index = panel.index();
        let _ = writeln!(out, "@g{index} hidden false");
        let _ = writeln!(out, "@g{index} type XY");
        let _ = writeln!(out, "@with g{index}");

        let (xmin, xmax) = self.world(panel.x_axis());
        let (ymin, ymax) = self.world(panel.y_axis());
        let _ = writeln!(
            out,
            "@    world {}, {}, {}, {}",
            self.num(xmin),
            self.num(ymin),
            self.num(xmax),
            self.num(ymax)
        );
        let (vxmin, vymin, vxmax, vymax) = panel.view();
        let _ = writeln!(
            out,
            "@    view {}, {}, {}, {}",
            self.num(vxmin),
            self.num(vymin),
            self.num(vxmax),
            self.num(vymax)
        );
        let _ = writeln!(out, "@    title \"{}\"", encode(panel.title().unwrap_or("")));
        let _ = writeln!(
            out,
            "@    subtitle \"{}\"",
            encode(panel.subtitle().unwrap_or(""))
        );
        let _ = writeln!(out, "@    xaxes scale {}", panel.x_axis().scale().keyword());
        let _ = writeln!(out, "@    yaxes scale {}", panel.y_axis().scale().keyword());

        self.axis_block(out, "xaxis", panel.x_axis());
        self.axis_block(out, "yaxis", panel.y_axis());
        self.alt_axis_block(out, "altxaxis", panel.alt_x().map(crate::axis::AltAxis::ticks));
        self.alt_axis_block(out, "altyaxis", panel.alt_y().map(crate::axis::AltAxis::ticks));
        self.legend_block(out, panel);

        for (number, dataset) in panel.datasets().iter().enumerate() {
            self.dataset_header(out, number, dataset);
        }
    }

    fn world(&self, axis: &Axis) -> (f64, f64) {
        axis.limits().unwrap_or((0.0, 1.0))
    }

    fn axis_block(&self, out: &mut String, marker: &str, axis: &Axis) {
        let _ = writeln!(out, "@    {marker} on");
        if let Some(label) = axis.label() {
            let _ = writeln!(out, "@    {marker} label \"{}\"", encode(label));
        }
        if let Some(spacing) = axis.effective_spacing() {
            let _ = writeln!(out, "@    {marker} tick major {}", self.num(spacing));
        }
        let _ = writeln!(out, "@    {marker} tick minor ticks {}", axis.minor_count());
        let grid = axis.grid();
        if grid.on {
            let _ = writeln!(out, "@    {marker} tick major grid on");
            let _ = writeln!(out, "@    {marker} tick major linestyle {}", grid.style.code());
            let _ = writeln!(out, "@    {marker} tick major linewidth {:.1}", grid.width);
            let _ = writeln!(out, "@    {marker} tick major color {}", grid.color.code());
        }
        let _ = writeln!(
            out,
            "@    {marker} ticklabel {}",
            on_off(axis.tick_labels_visible())
        );
        if !axis.special_ticks().is_empty() {
            self.spec_ticks(out, marker, axis.special_ticks().iter().map(|t| {
                (t.position, Some(t.label.as_str()))
            }));
        } else if let MajorTicks::Positions(positions) = axis.major_ticks() {
            self.spec_ticks(out, marker, positions.iter().map(|&p| (p, None)));
        }
    }

    /// Explicitly positioned ticks: `type both` when labels ride along,
    /// `type ticks` for bare positions.
    fn spec_ticks<'a, I>(&self, out: &mut String, marker: &str, ticks: I)
    where
        I: Iterator<Item = (f64, Option<&'a str>)>,
    {
        let ticks: Vec<_> = ticks.collect();
        let labeled = ticks.iter().any(|(_, label)| label.is_some());
        let _ = writeln!(
            out,
            "@    {marker} tick spec type {}",
            if labeled { "both" } else { "ticks" }
        );
        let _ = writeln!(out, "@    {marker} tick spec {}", ticks.len());
        for (i, (position, label)) in ticks.iter().enumerate() {
            let _ = writeln!(out, "@    {marker} tick major {i}, {}", self.num(*position));
            if let Some(label) = label {
                let _ = writeln!(out, "@    {marker} ticklabel {i}, \"{}\"", encode(label));
            }
        }
    }

    fn alt_axis_block(
        &self,
        out: &mut String,
        marker: &str,
        ticks: Option<&[crate::axis::SpecialTick]>,
    ) {
        match ticks {
            None => {
                let _ = writeln!(out, "@    {marker} off");
            }
            Some(ticks) => {
                let _ = writeln!(out, "@    {marker} on");
                self.spec_ticks(out, marker, ticks.iter().map(|t| {
                    (t.position, Some(t.label.as_str()))
                }));
            }
        }
    }

    fn legend_block(&self, out: &mut String, panel: &Panel) {
        let legend = panel.legend();
        let on = legend.visible() && !legend.entries().is_empty();
        let _ = writeln!(out, "@    legend {}", on_off(on));
        let _ = writeln!(out, "@    legend loctype view");
        let (x, y) = legend.location();
        let _ = writeln!(out, "@    legend {}, {}", self.num(x), self.num(y));
        let _ = writeln!(out, "@    legend char size {}", self.num(legend.char_size()));
    }

    fn dataset_header(&self, out: &mut String, number: usize, dataset: &Dataset) {
        let style = dataset.style();
        let color = style.color.unwrap_or(Color::Black);
        let symbol = style.symbol.unwrap_or(Symbol::None);
        let line_style = style.line_style.unwrap_or(LineStyle::Solid);
        let line_width = style.line_width.unwrap_or(1.5);
        let marker_scale = style.marker_scale.unwrap_or(1.0);

        let _ = writeln!(out, "@    s{number} hidden false");
        let _ = writeln!(out, "@    s{number} type {}", dataset.kind().keyword());
        if let Some(label) = dataset.label() {
            let _ = writeln!(out, "@    s{number} legend \"{}\"", encode(label));
        }
        if let Some(comment) = dataset.comment() {
            let _ = writeln!(out, "@    s{number} comment \"{}\"", encode(comment));
        }
        let _ = writeln!(out, "@    s{number} symbol {}", symbol.code());
        let _ = writeln!(out, "@    s{number} symbol size {}", self.num(marker_scale));
        let _ = writeln!(out, "@    s{number} symbol color {}", color.code());
        let _ = writeln!(
            out,
            "@    s{number} line type {}",
            i32::from(line_style != LineStyle::None)
        );
        let _ = writeln!(out, "@    s{number} line linestyle {}", line_style.code());
        let _ = writeln!(out, "@    s{number} line linewidth {:.1}", line_width);
        let _ = writeln!(out, "@    s{number} line color {}", color.code());
    }

    fn drawing_objects(&self, out: &mut String, panel: &Panel) {
        for annotation in panel.annotations() {
            match annotation {
                Annotation::ReferenceLine {
                    orientation,
                    value,
                    span,
                    props,
                } => {
                    let (start, end) = self.line_endpoints(panel, *orientation, *value, *span);
                    let _ = writeln!(out, "@with line");
                    let _ = writeln!(out, "@    line on");
                    let _ = writeln!(out, "@    line g{}", panel.index());
                    let _ = writeln!(out, "@    line loctype world");
                    let _ = writeln!(out, "@    line color {}", props.color.code());
                    let _ = writeln!(out, "@    line linestyle {}", props.style.code());
                    let _ = writeln!(out, "@    line linewidth {:.1}", props.width);
                    let _ = writeln!(
                        out,
                        "@    line {}, {}, {}, {}",
                        self.num(start.0),
                        self.num(start.1),
                        self.num(end.0),
                        self.num(end.1)
                    );
                    let _ = writeln!(out, "@line def");
                }
                Annotation::Text {
                    position,
                    content,
                    props,
                } => {
                    let _ = writeln!(out, "@with string");
                    let _ = writeln!(out, "@    string on");
                    let _ = writeln!(out, "@    string g{}", panel.index());
                    let _ = writeln!(out, "@    string loctype world");
                    let _ = writeln!(out, "@    string color {}", props.color.code());
                    let _ = writeln!(out, "@    string char size {}", self.num(props.char_size));
                    let _ = writeln!(
                        out,
                        "@    string {}, {}",
                        self.num(position.0),
                        self.num(position.1)
                    );
                    let _ = writeln!(out, "@string def \"{}\"", encode(content));
                }
            }
        }
    }

    /// A reference line without an explicit span runs across the full world
    /// extent of the crossing axis.
    fn line_endpoints(
        &self,
        panel: &Panel,
        orientation: Orientation,
        value: f64,
        span: Option<(f64, f64)>,
    ) -> ((f64, f64), (f64, f64)) {
        match orientation {
            Orientation::Horizontal => {
                let (lo, hi) = span.unwrap_or_else(|| self.world(panel.x_axis()));
                ((lo, value), (hi, value))
            }
            Orientation::Vertical => {
                let (lo, hi) = span.unwrap_or_else(|| self.world(panel.y_axis()));
                ((value, lo), (value, hi))
            }
        }
    }

    fn data_sections(&self, out: &mut String, panel: &Panel) {
        for (number, dataset) in panel.datasets().iter().enumerate() {
            let _ = writeln!(out, "@target G{}.S{number}", panel.index());
            let _ = writeln!(out, "@type {}", dataset.kind().keyword());
            for i in 0..dataset.len() {
                let x = self.num(dataset.x()[i]);
                let y = self.num(dataset.y()[i]);
                match dataset.kind() {
                    DatasetKind::Xy => {
                        let _ = writeln!(out, "{x} {y}");
                    }
                    DatasetKind::XySized => {
                        let _ = writeln!(out, "{x} {y} {}", self.num(dataset.sizes()[i]));
                    }
                    DatasetKind::Xyz => {
                        let _ = writeln!(out, "{x} {y} {}", self.num(dataset.z()[i]));
                    }
                }
            }
            out.push_str("&\n");
        }
    }
}

const fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Series;
    use crate::page::Page;

    fn simple_page() -> Page {
        let mut page = Page::new();
        page.panel_mut(0)
            .plot_xy(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])
            .unwrap();
        page
    }

    #[test]
    fn test_header_constants() {
        let mut page = simple_page();
        let text = page.render().unwrap();
        assert!(text.starts_with("# Grace project file\n#\n@version 50122\n"));
        assert!(text.contains("@page size 792, 612\n"));
        assert!(text.contains("@background color 0\n"));
        assert!(text.contains("@map font 12 to \"Symbol\", \"Symbol\"\n"));
        assert!(text.contains("@map color 0 to (255, 255, 255), \"white\"\n"));
        assert!(text.contains("@map color 1 to (0, 0, 0), \"black\"\n"));
    }

    #[test]
    fn test_description_is_encoded_and_optional() {
        let mut page = simple_page();
        let text = page.render().unwrap();
        assert!(!text.contains("@description"));
        page.set_description("say \"hi\"");
        let text = page.render().unwrap();
        assert!(text.contains("@description \"say \\\"hi\\\"\"\n"));
    }

    #[test]
    fn test_graph_and_data_sections() {
        let mut page = simple_page();
        let text = page.render().unwrap();
        assert!(text.contains("@g0 hidden false\n@g0 type XY\n@with g0\n"));
        assert!(text.contains("@target G0.S0\n@type xy\n"));
        assert_eq!(text.matches("@target").count(), 1);
        assert!(text.contains("2.000000 4.000000\n&\n"));
    }

    #[test]
    fn test_world_brackets_data() {
        let mut page = simple_page();
        let text = page.render().unwrap();
        let world = text
            .lines()
            .find(|l| l.starts_with("@    world "))
            .unwrap()
            .trim_start_matches("@    world ");
        let bounds: Vec<f64> = world.split(", ").map(|v| v.parse().unwrap()).collect();
        assert!(bounds[0] <= 0.0 && bounds[2] >= 2.0);
        assert!(bounds[1] <= 0.0 && bounds[3] >= 4.0);
    }

    #[test]
    fn test_dataset_indices_by_enumeration_order() {
        let mut page = Page::new();
        page.panel_mut(0).plot_xy(&[0.0], &[0.0]).unwrap();
        page.panel_mut(0).plot_xy(&[1.0], &[1.0]).unwrap();
        let text = page.render().unwrap();
        assert!(text.contains("@    s0 hidden false"));
        assert!(text.contains("@    s1 hidden false"));
        assert!(text.contains("@target G0.S0"));
        assert!(text.contains("@target G0.S1"));
    }

    #[test]
    fn test_special_ticks_emitted_in_order() {
        let mut page = simple_page();
        page.panel_mut(0)
            .x_axis_mut()
            .set_special(&[0.0, 5.0, 10.0], &["G", "X", "L"])
            .unwrap();
        let text = page.render().unwrap();
        assert!(text.contains("@    xaxis tick spec type both\n@    xaxis tick spec 3\n"));
        let g = text.find("ticklabel 0, \"G\"").unwrap();
        let x = text.find("ticklabel 1, \"X\"").unwrap();
        let l = text.find("ticklabel 2, \"L\"").unwrap();
        assert!(g < x && x < l);
    }

    #[test]
    fn test_absent_alternate_axes_off() {
        let mut page = simple_page();
        let text = page.render().unwrap();
        assert!(text.contains("@    altxaxis off\n"));
        assert!(text.contains("@    altyaxis off\n"));
    }

    #[test]
    fn test_alt_axis_breaks_on() {
        let mut page = simple_page();
        page.panel_mut(0)
            .set_alt_x_breaks(&[1.0], &["K"])
            .unwrap();
        let text = page.render().unwrap();
        assert!(text.contains("@    altxaxis on\n"));
        assert!(text.contains("@    altxaxis ticklabel 0, \"K\"\n"));
    }

    #[test]
    fn test_legend_off_without_entries() {
        let mut page = simple_page();
        let text = page.render().unwrap();
        assert!(text.contains("@    legend off\n"));
        let mut labeled = Page::new();
        labeled
            .panel_mut(0)
            .plot(&[0.0], &[0.0], Series::new().label("a"))
            .unwrap();
        let text = labeled.render().unwrap();
        assert!(text.contains("@    legend on\n"));
    }

    #[test]
    fn test_reference_line_spans_world() {
        let mut page = simple_page();
        page.panel_mut(0)
            .axhline(1.0, crate::annotation::LineProps::default());
        let text = page.render().unwrap();
        assert!(text.contains("@with line\n@    line on\n@    line g0\n"));
        assert!(text.contains("@line def\n"));
    }

    #[test]
    fn test_text_annotation_encoded() {
        let mut page = simple_page();
        page.panel_mut(0).text(
            "\\Gamma point",
            (0.5, 0.5),
            crate::annotation::TextProps::default(),
        );
        let text = page.render().unwrap();
        assert!(text.contains("@string def \"\\xG\\f{} point\"\n"));
    }

    #[test]
    fn test_precision_applies_to_rows() {
        let mut page = simple_page();
        let text = page
            .render_with(&Serializer::with_precision(2))
            .unwrap();
        assert!(text.contains("2.00 4.00\n"));
        assert!(!text.contains("2.000000 4.000000"));
    }

    #[test]
    fn test_sized_dataset_rows_have_three_columns() {
        let mut page = Page::new();
        page.panel_mut(0)
            .plot(&[0.0, 1.0], &[0.0, 1.0], Series::sized(&[0.5, 1.5]))
            .unwrap();
        let text = page.render().unwrap();
        assert!(text.contains("@type xysize\n"));
        assert!(text.contains("1.000000 1.000000 1.500000\n"));
    }

    #[test]
    fn test_serialization_is_pure() {
        let mut page = simple_page();
        page.finalize().unwrap();
        let s = Serializer::new();
        assert_eq!(s.serialize(&page), s.serialize(&page));
    }
}
