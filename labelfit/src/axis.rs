// Copyright 2026 the LabelFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed axis configuration and the live axis produced by initialization.
//!
//! The host chart owns axis setup; label fitting only reads and patches the
//! narrow slice modeled here. Option lookup is plain field access with
//! explicit fallback chains, so every knob the adapter touches is visible
//! in the type.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// How the host treats labels that extend past the plot edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelOverflow {
    /// Let labels render past the edge; fitting is handled elsewhere.
    Allow,
    /// Host-side justification of overflowing labels.
    Justify,
}

/// Font-related style overrides, each optional with explicit fallbacks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontStyleOptions {
    /// CSS font shorthand, e.g. `"11px Arial"`; wins over the other fields.
    pub font: Option<String>,
    /// Explicit font size with unit.
    pub font_size: Option<String>,
    /// Explicit font family.
    pub font_family: Option<String>,
}

/// Label rendering options on one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelOptions {
    /// Label rotation in degrees; `0.0` renders horizontally.
    pub rotation: f64,
    /// Style overrides for labels on this axis.
    pub style: Option<FontStyleOptions>,
    /// Overflow handling requested from the host.
    pub overflow: Option<LabelOverflow>,
    /// Maximum number of stagger lines the host may use.
    pub max_stagger_lines: Option<u32>,
}

/// The slice of host axis configuration that label fitting reads and patches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisOptions {
    /// Whether this is the horizontal (category) axis.
    pub is_x: bool,
    /// Enables label shortening and tick skipping on this axis.
    ///
    /// Off by default; every other axis passes through untouched.
    pub shorten_labels: bool,
    /// Ordered category labels.
    pub categories: Vec<String>,
    /// Label rendering options.
    pub labels: LabelOptions,
}

impl AxisOptions {
    /// Creates options for a horizontal category axis.
    #[must_use]
    pub fn category_x() -> Self {
        Self {
            is_x: true,
            ..Self::default()
        }
    }

    /// Enable or disable label shortening.
    #[must_use]
    pub fn with_shorten_labels(mut self, shorten_labels: bool) -> Self {
        self.shorten_labels = shorten_labels;
        self
    }

    /// Set the ordered category labels.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the label rotation in degrees.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.labels.rotation = degrees;
        self
    }

    /// Set the label style overrides.
    #[must_use]
    pub fn with_label_style(mut self, style: FontStyleOptions) -> Self {
        self.labels.style = Some(style);
        self
    }
}

/// Chart-level context exposed by the live axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartInfo {
    /// Width of the plot area in pixels.
    pub plot_width: f64,
    /// Chart-level label style, used as a fallback during font resolution.
    pub label_style: Option<FontStyleOptions>,
}

/// Inputs for one label-formatter call, one per rendered tick label.
#[derive(Clone, Copy, Debug)]
pub struct LabelContext<'a> {
    /// The raw label text for this tick.
    pub value: &'a str,
    /// Width of the plot area in pixels.
    pub plot_width: f64,
    /// Number of tick positions the host is rendering.
    pub tick_count: usize,
}

/// A host-invoked callback returning the display string for one tick label.
pub trait LabelFormatter {
    /// Formats one label.
    fn format(&self, ctx: &LabelContext<'_>) -> String;
}

/// A host-invoked callback returning which category indices to render.
pub trait TickPositioner {
    /// Returns ascending category indices, always starting at index 0 and
    /// never reaching `category_count`.
    fn tick_positions(&self, category_count: usize, plot_width: f64) -> Vec<usize>;
}

/// A live axis as handed back by host initialization.
///
/// The callback slots start empty; [`crate::adapt`] fills them in after
/// delegating to the host. The host then calls [`Axis::formatted_label`]
/// once per rendered label and [`Axis::computed_tick_positions`] once per
/// layout pass. All calls are synchronous on the host's render thread.
pub struct Axis {
    /// The options this axis was initialized with.
    pub options: AxisOptions,
    /// Chart-level context.
    pub chart: ChartInfo,
    /// Tick positions chosen by the host; one per category by default.
    pub tick_positions: Vec<usize>,
    /// Installed label formatter, if any.
    pub label_formatter: Option<Box<dyn LabelFormatter>>,
    /// Installed tick positioner, if any.
    pub tick_positioner: Option<Box<dyn TickPositioner>>,
}

impl core::fmt::Debug for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Axis")
            .field("options", &self.options)
            .field("chart", &self.chart)
            .field("tick_positions", &self.tick_positions)
            .field("label_formatter", &self.label_formatter.is_some())
            .field("tick_positioner", &self.tick_positioner.is_some())
            .finish()
    }
}

impl Axis {
    /// Creates a live axis with one tick per category and no callbacks.
    #[must_use]
    pub fn new(options: AxisOptions, chart: ChartInfo) -> Self {
        let tick_positions = (0..options.categories.len()).collect();
        Self {
            options,
            chart,
            tick_positions,
            label_formatter: None,
            tick_positioner: None,
        }
    }

    /// The display string for `value`, via the installed formatter.
    ///
    /// Without a formatter the value passes through unchanged.
    #[must_use]
    pub fn formatted_label(&self, value: &str) -> String {
        match &self.label_formatter {
            Some(formatter) => formatter.format(&LabelContext {
                value,
                plot_width: self.chart.plot_width,
                tick_count: self.tick_positions.len(),
            }),
            None => String::from(value),
        }
    }

    /// The category indices to render, via the installed positioner.
    ///
    /// Without a positioner every category keeps its tick.
    #[must_use]
    pub fn computed_tick_positions(&self) -> Vec<usize> {
        match &self.tick_positioner {
            Some(positioner) => {
                positioner.tick_positions(self.options.categories.len(), self.chart.plot_width)
            }
            None => self.tick_positions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn new_axis_gets_one_tick_per_category() {
        let options = AxisOptions::category_x().with_categories(["a", "b", "c"]);
        let axis = Axis::new(options, ChartInfo::default());
        assert_eq!(axis.tick_positions, vec![0, 1, 2]);
    }

    #[test]
    fn labels_and_ticks_pass_through_without_callbacks() {
        let options = AxisOptions::category_x().with_categories(["a", "b"]);
        let axis = Axis::new(options, ChartInfo::default());
        assert_eq!(axis.formatted_label("a"), "a");
        assert_eq!(axis.computed_tick_positions(), vec![0, 1]);
    }
}
