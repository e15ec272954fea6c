//! End-to-end document building scenarios.
//!
//! Each test builds a page through the public API, renders the project text
//! and checks the emitted grammar.

use agrdoc::prelude::*;

/// Single panel, one xy dataset, everything automatic.
#[test]
fn test_single_panel_roundtrip() {
    let mut page = Page::new();
    page.panel_mut(0)
        .plot_xy(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])
        .unwrap();
    page.panel_mut(0).set_xlabel("x");
    page.panel_mut(0).set_ylabel("x^{2}");
    let text = page.render().unwrap();

    assert!(text.starts_with("# Grace project file\n#\n@version 50122\n"));
    // exactly one dataset header and one data section
    assert_eq!(text.matches(" s0 hidden false").count(), 1);
    assert_eq!(text.matches("@target").count(), 1);
    assert!(text.contains("@target G0.S0\n@type xy\n"));
    assert!(text.trim_end().ends_with('&'));
    // superscript markup is encoded
    assert!(text.contains("label \"x\\S2\\N\""));

    // resolved limits bracket the data with padding
    let (xmin, xmax) = page.panel(0).x_axis().limits().unwrap();
    let (ymin, ymax) = page.panel(0).y_axis().limits().unwrap();
    assert!(xmin < 0.0 && xmax > 2.0);
    assert!(ymin < 0.0 && ymax > 4.0);
}

/// Two labeled datasets draw the first two registry colors, in order.
#[test]
fn test_auto_styles_cycle_in_attachment_order() {
    let mut page = Page::new();
    page.panel_mut(0)
        .plot(&[0.0, 1.0], &[0.0, 1.0], Series::new().label("up"))
        .unwrap();
    page.panel_mut(0)
        .plot(&[0.0, 1.0], &[1.0, 0.0], Series::new().label("down"))
        .unwrap();
    page.finalize().unwrap();

    let palette = page.registry().palette().to_vec();
    let styles: Vec<Color> = page
        .panel(0)
        .datasets()
        .iter()
        .map(|ds| ds.style().color.unwrap())
        .collect();
    assert_eq!(styles, vec![palette[0], palette[1]]);

    let entries = page.panel(0).legend().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "up");
    assert_eq!(entries[0].style.color, Some(palette[0]));
    assert_eq!(entries[1].style.color, Some(palette[1]));
}

/// Explicit styles never consume a cycle slot.
#[test]
fn test_explicit_color_does_not_advance_cycle() {
    let mut page = Page::new();
    page.panel_mut(0)
        .plot(&[0.0], &[0.0], Series::new().color(Color::Magenta))
        .unwrap();
    page.panel_mut(0).plot_xy(&[0.0], &[1.0]).unwrap();
    page.finalize().unwrap();
    let palette = page.registry().palette().to_vec();
    let datasets = page.panel(0).datasets();
    assert_eq!(datasets[0].style().color, Some(Color::Magenta));
    assert_eq!(datasets[1].style().color, Some(palette[0]));
}

/// Logarithmic axes reject non-positive bounds at the offending call.
#[test]
fn test_log_axis_rejects_bad_limits() {
    let mut page = Page::new();
    let panel = page.panel_mut(0);
    panel.set_xscale(Scale::Logarithmic).unwrap();
    let err = panel.set_xlim(-1.0, 10.0).unwrap_err();
    assert!(matches!(err, Error::InvalidDomain { value } if value == -1.0));
    // the axis is untouched and the page still renders
    panel.plot_xy(&[1.0, 10.0], &[1.0, 2.0]).unwrap();
    assert!(page.render().is_ok());
}

/// Log autoscale rejects non-positive data instead of emitting a document.
#[test]
fn test_log_autoscale_rejects_non_positive_data() {
    let mut page = Page::new();
    page.panel_mut(0).set_yscale(Scale::Logarithmic).unwrap();
    page.panel_mut(0)
        .plot_xy(&[0.0, 1.0], &[0.0, 1.0])
        .unwrap();
    assert!(matches!(page.render(), Err(Error::InvalidDomain { .. })));
}

/// Special ticks come out as paired position/label directives, in order.
#[test]
fn test_special_ticks_paired_and_ordered() {
    let mut page = Page::new();
    page.panel_mut(0).plot_xy(&[0.0, 10.0], &[0.0, 1.0]).unwrap();
    page.panel_mut(0)
        .x_axis_mut()
        .set_special(&[0.0, 5.0, 10.0], &["G", "X", "L"])
        .unwrap();
    let text = page.render().unwrap();
    assert!(text.contains("xaxis tick spec type both"));
    assert!(text.contains("xaxis tick spec 3"));
    for (i, label) in ["G", "X", "L"].iter().enumerate() {
        assert!(text.contains(&format!("xaxis ticklabel {i}, \"{label}\"")));
    }
    let positions: Vec<usize> = ["\"G\"", "\"X\"", "\"L\""]
        .iter()
        .map(|l| text.find(*l).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

/// Mismatched tick arrays fail fast and leave the axis unchanged.
#[test]
fn test_special_tick_mismatch_fails_fast() {
    let mut page = Page::new();
    let err = page
        .panel_mut(0)
        .x_axis_mut()
        .set_special(&[0.0, 1.0], &["only"])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::LengthMismatch {
            positions: 2,
            labels: 1
        }
    ));
    assert!(page.panel(0).x_axis().special_ticks().is_empty());
}

/// Grid pages place every panel at a unique in-bounds view.
#[test]
fn test_grid_pages_emit_all_graphs() {
    let mut page = Page::with_grid(GridOptions::new(2, 2)).unwrap();
    for i in 0..4 {
        page.panel_mut(i)
            .plot_xy(&[0.0, 1.0], &[i as f64, i as f64 + 1.0])
            .unwrap();
    }
    let text = page.render().unwrap();
    for i in 0..4 {
        assert!(text.contains(&format!("@g{i} hidden false")));
        assert!(text.contains(&format!("@target G{i}.S0")));
    }
}

/// Mixed explicit/auto bounds: the pinned bound survives autoscale.
#[test]
fn test_partial_limit_override() {
    let mut page = Page::new();
    page.panel_mut(0)
        .plot_xy(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])
        .unwrap();
    page.panel_mut(0).y_axis_mut().set_min(0.0).unwrap();
    page.finalize().unwrap();
    let (ymin, ymax) = page.panel(0).y_axis().limits().unwrap();
    assert_eq!(ymin, 0.0);
    assert!(ymax > 4.0);
}

/// Annotations serialize as drawing objects after the graph blocks.
#[test]
fn test_annotations_follow_graph_blocks() {
    let mut page = Page::new();
    page.panel_mut(0).plot_xy(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    page.panel_mut(0).axhline(0.5, LineProps::default());
    page.panel_mut(0)
        .text("\\Gamma", (0.2, 0.8), TextProps::default());
    let text = page.render().unwrap();
    let graph = text.find("@with g0").unwrap();
    let line = text.find("@with line").unwrap();
    let string = text.find("@with string").unwrap();
    let target = text.find("@target").unwrap();
    assert!(graph < line && line < string && string < target);
    assert!(text.contains("@string def \"\\xG\\f{}\""));
}

/// Empty panels render by default, fail when data is required.
#[test]
fn test_empty_panel_policy() {
    let mut page = Page::with_grid(GridOptions::new(1, 2)).unwrap();
    page.panel_mut(0).plot_xy(&[0.0], &[1.0]).unwrap();
    assert!(page.render().is_ok());
    page.require_data(true);
    assert!(matches!(
        page.render(),
        Err(Error::EmptyPanel { panel: 1 })
    ));
}

/// Saving writes the document atomically to the target path.
#[test]
fn test_save_writes_complete_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("figure.agr");
    let mut page = Page::new();
    page.panel_mut(0)
        .plot_xy(&[0.0, 1.0], &[0.0, 1.0])
        .unwrap();
    page.save(&path).unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, page.render().unwrap());
    // no stray temporary left behind
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

/// Rendering twice produces byte-identical output.
#[test]
fn test_render_is_deterministic() {
    let build = || {
        let mut page = Page::with_grid(GridOptions::new(2, 1)).unwrap();
        page.set_description("band structure");
        page.panel_mut(0)
            .plot(
                &[0.0, 0.5, 1.0],
                &[0.0, -1.0, 0.5],
                Series::new().label("\\epsilon_{n}").symbol(Symbol::Circle),
            )
            .unwrap();
        page.panel_mut(1)
            .plot(&[1.0, 2.0], &[3.0, 4.0], Series::sized(&[1.0, 2.0]))
            .unwrap();
        page.panel_mut(1).set_title("DOS");
        page.render().unwrap()
    };
    assert_eq!(build(), build());
}
