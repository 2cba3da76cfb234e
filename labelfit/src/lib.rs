// Copyright 2026 the LabelFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis label fitting for vector-rendered charts.
//!
//! When a category axis has more (or longer) labels than its plot width can
//! hold, two things have to give:
//! - **Shortening**: each label is truncated to its pixel budget and gets an
//!   ellipsis, using cached text measurement ([`TextShortener`]).
//! - **Tick skipping**: only every n-th category keeps its tick, so the
//!   surviving labels do not overlap.
//!
//! Both are wired into the host chart through [`adapt`], a decorator over
//! the host's axis-initialization function. The host stays in charge of
//! rendering; this crate only installs a label formatter and a tick
//! positioner for it to call back into.
//!
//! Rendering, scales, and anything else chart-shaped are out of scope.
//! Measurement is behind [`TextMeasurer`], so the same fitting logic runs
//! against a browser SVG surface (`labelfit_text_web`) or the bundled
//! heuristic measurer.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod adapt;
mod axis;
#[cfg(not(feature = "std"))]
mod float;
mod shorten;

pub use adapt::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, EXPECTED_LABEL_WIDTH, MAX_AXIS_HEIGHT, adapt,
};
pub use axis::{
    Axis, AxisOptions, ChartInfo, FontStyleOptions, LabelContext, LabelFormatter, LabelOptions,
    LabelOverflow, TickPositioner,
};
pub use labelfit_text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
pub use shorten::{ELLIPSIS, TextShortener};
