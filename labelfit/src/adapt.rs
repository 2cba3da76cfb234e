// Copyright 2026 the LabelFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis-initialization decorator.
//!
//! Hosts expose axis setup as a function from options to a live axis. We
//! wrap that function instead of patching host internals: guard, patch the
//! options, delegate, then resolve the effective font from the initialized
//! axis and install the label formatter and tick positioner with the
//! resolved font passed by value (no mutable state shared with the host's
//! init path).

extern crate alloc;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use labelfit_text::{TextMeasurer, TextStyle};

use crate::axis::{
    Axis, AxisOptions, LabelContext, LabelFormatter, LabelOverflow, TickPositioner,
};
use crate::shorten::TextShortener;

/// Pixel budget for one rotated label, bounded by the tallest axis strip
/// the chart will reserve.
pub const MAX_AXIS_HEIGHT: f64 = 100.0;

/// Expected footprint of one horizontal label in pixels, used to decide how
/// many ticks fit across the plot.
pub const EXPECTED_LABEL_WIDTH: f64 = 80.0;

/// Fallback font size when no style provides one.
pub const DEFAULT_FONT_SIZE: &str = "11px";

/// Fallback font family list when no style provides one.
pub const DEFAULT_FONT_FAMILY: &str =
    "\"Lucida Grande\", \"Lucida Sans Unicode\", Verdana, Arial, Helvetica, sans-serif";

/// Wraps a host axis-initialization function with label fitting.
///
/// For the horizontal category axis with `shorten_labels` enabled, the
/// returned function:
///
/// 1. forces single-line labels (`max_stagger_lines = 1`) and takes
///    overflow handling away from the host,
/// 2. swaps every space in the category strings for a non-breaking space,
///    so the host cannot wrap a label before shortening sees it,
/// 3. delegates to `init` so the host performs its normal setup, and
/// 4. resolves the effective label font from the initialized axis and
///    installs a shortening label formatter plus a skip-based tick
///    positioner built from it.
///
/// Any other axis, or one without `shorten_labels`, delegates untouched.
///
/// The shortener is an explicit collaborator so its measurement cache stays
/// scoped to one chart; construct one per chart and share it across that
/// chart's axes via the `Rc`.
pub fn adapt<M, I>(shortener: Rc<TextShortener<M>>, init: I) -> impl FnOnce(AxisOptions) -> Axis
where
    M: TextMeasurer + 'static,
    I: FnOnce(AxisOptions) -> Axis,
{
    move |mut options: AxisOptions| {
        if !options.is_x || !options.shorten_labels {
            return init(options);
        }

        options.labels.max_stagger_lines = Some(1);
        options.labels.overflow = Some(LabelOverflow::Allow);
        for category in &mut options.categories {
            *category = category.replace(' ', "\u{00A0}");
        }

        let mut axis = init(options);

        // Second phase: the host has resolved its styles by now, so the
        // effective font can be derived and handed to the callbacks.
        let style = resolve_label_style(&axis);
        let rotated = axis.options.labels.rotation != 0.0;
        let font_px = style.size_px();
        axis.label_formatter = Some(Box::new(ShorteningFormatter {
            shortener,
            style,
            rotated,
        }));
        axis.tick_positioner = Some(Box::new(SkippingTickPositioner { rotated, font_px }));
        axis
    }
}

/// Resolves the effective label font for a live axis.
///
/// A `font` shorthand wins and splits on its first space into a size prefix
/// and family suffix. Otherwise the family falls back through the axis
/// label style, the chart-level style, and [`DEFAULT_FONT_FAMILY`]; the
/// size falls back through the axis label style and [`DEFAULT_FONT_SIZE`].
/// Malformed input never fails, it only degrades to the defaults.
fn resolve_label_style(axis: &Axis) -> TextStyle {
    let label_style = axis.options.labels.style.as_ref();
    if let Some(font) = label_style.and_then(|s| s.font.as_deref())
        && let Some((size, family)) = font.split_once(' ')
    {
        return TextStyle::new(size, family);
    }

    let family = label_style
        .and_then(|s| s.font_family.clone())
        .or_else(|| {
            axis.chart
                .label_style
                .as_ref()
                .and_then(|s| s.font_family.clone())
        })
        .unwrap_or_else(|| String::from(DEFAULT_FONT_FAMILY));
    let size = label_style
        .and_then(|s| s.font_size.clone())
        .unwrap_or_else(|| String::from(DEFAULT_FONT_SIZE));
    TextStyle::new(size, family)
}

/// Label formatter that shortens each label to its pixel budget.
///
/// Horizontal labels share the plot width evenly across the rendered tick
/// positions; rotated labels get a fixed budget since they extend along the
/// axis height rather than the plot width.
struct ShorteningFormatter<M> {
    shortener: Rc<TextShortener<M>>,
    style: TextStyle,
    rotated: bool,
}

impl<M: TextMeasurer> LabelFormatter for ShorteningFormatter<M> {
    fn format(&self, ctx: &LabelContext<'_>) -> String {
        let budget = if self.rotated {
            MAX_AXIS_HEIGHT
        } else {
            (ctx.plot_width / ctx.tick_count.max(1) as f64).round()
        };
        self.shortener.shortened(ctx.value, budget, &self.style)
    }
}

/// Tick positioner that keeps every `skip`-th category.
#[derive(Clone, Copy, Debug)]
struct SkippingTickPositioner {
    rotated: bool,
    font_px: f64,
}

impl TickPositioner for SkippingTickPositioner {
    fn tick_positions(&self, category_count: usize, plot_width: f64) -> Vec<usize> {
        let footprint = if self.rotated {
            2.0 * self.font_px
        } else {
            EXPECTED_LABEL_WIDTH
        };
        let fit = (plot_width / footprint).floor().max(1.0);
        let skip = (category_count as f64 / fit).ceil().max(1.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "skip is at least 1 and at most the category count"
        )]
        let skip = skip as usize;
        (0..category_count).step_by(skip).collect()
    }
}
