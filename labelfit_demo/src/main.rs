// Copyright 2026 the LabelFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label fitting demo: writes a small SVG of a category axis whose labels
//! have been shortened and whose ticks have been skipped.

use std::fmt::Write as _;
use std::rc::Rc;

use labelfit::{Axis, AxisOptions, ChartInfo, HeuristicTextMeasurer, TextShortener, adapt};

const PLOT_WIDTH: f64 = 480.0;
const AXIS_Y: f64 = 40.0;

fn main() {
    let categories = [
        "Amsterdam Centraal",
        "Berlin Hauptbahnhof",
        "Bruxelles-Midi",
        "Frankfurt am Main",
        "Genève-Cornavin",
        "Köln Hauptbahnhof",
        "London St Pancras",
        "Milano Centrale",
        "Paris Gare de Lyon",
        "Wien Hauptbahnhof",
    ];

    // One shortener per chart: the measurement cache is scoped to it.
    let shortener = Rc::new(TextShortener::new(HeuristicTextMeasurer));
    let options = AxisOptions::category_x()
        .with_shorten_labels(true)
        .with_categories(categories);
    let init = adapt(Rc::clone(&shortener), |options| {
        Axis::new(
            options,
            ChartInfo {
                plot_width: PLOT_WIDTH,
                label_style: None,
            },
        )
    });

    let mut axis = init(options);
    // A host would feed the positioner's answer back into the axis before
    // formatting; do the same so label budgets see the surviving ticks.
    axis.tick_positions = axis.computed_tick_positions();

    let svg = render_axis_svg(&axis);
    std::fs::write("labelfit_demo.svg", svg).expect("write labelfit_demo.svg");
    println!(
        "wrote labelfit_demo.svg ({} of {} ticks kept)",
        axis.tick_positions.len(),
        axis.options.categories.len()
    );
}

fn render_axis_svg(axis: &Axis) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} 80" width="{}" height="80">"#,
        PLOT_WIDTH + 20.0,
        PLOT_WIDTH + 20.0,
    ));
    out.push('\n');
    let _ = writeln!(
        out,
        r#"<line x1="10" y1="{AXIS_Y}" x2="{}" y2="{AXIS_Y}" stroke="black"/>"#,
        PLOT_WIDTH + 10.0
    );

    let count = axis.options.categories.len().max(1) as f64;
    let step = PLOT_WIDTH / count;
    for &index in &axis.tick_positions {
        let x = 10.0 + (index as f64 + 0.5) * step;
        let _ = writeln!(
            out,
            r#"<line x1="{x}" y1="{AXIS_Y}" x2="{x}" y2="{}" stroke="black"/>"#,
            AXIS_Y + 5.0
        );
        let label = axis.formatted_label(&axis.options.categories[index]);
        let _ = writeln!(
            out,
            r#"<text x="{x}" y="{}" font-size="11" text-anchor="middle">{label}</text>"#,
            AXIS_Y + 18.0
        );
    }

    out.push_str("</svg>\n");
    out
}
