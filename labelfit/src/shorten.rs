// Copyright 2026 the LabelFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shrink-to-fit label shortening over cached text measurement.
//!
//! Measuring rendered text is the expensive step (a DOM round trip on the
//! web), so every measurement is memoized. The shortening loop itself is
//! cheap: it estimates a per-character width from the last measurement,
//! cuts, and re-measures until the candidate fits.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::HashMap;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use labelfit_text::{TextMeasurer, TextMetrics, TextStyle};

/// Suffix appended to shortened labels.
pub const ELLIPSIS: &str = "...";

/// Characters reserved for the ellipsis when estimating how much to keep.
const ELLIPSIS_RESERVE: usize = 3;

/// Shortens labels to a pixel budget, memoizing measurements.
///
/// The cache maps a style key to the texts already measured under that
/// style. It is append-only and never evicted: label vocabularies are
/// bounded by a chart's category set, so unbounded growth is acceptable.
/// One instance is meant to be shared (via `Rc`) across the axes of a
/// single chart, not across charts, so independent charts cannot bleed
/// cached measurements into each other.
#[derive(Debug)]
pub struct TextShortener<M> {
    measurer: M,
    cache: RefCell<HashMap<String, HashMap<String, TextMetrics>>>,
}

impl<M: TextMeasurer> TextShortener<M> {
    /// Creates a shortener with an empty cache.
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Measures `text` under `style`, reusing a cached result when present.
    ///
    /// Empty text short-circuits to zero metrics without touching the cache
    /// or the measurer.
    pub fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::ZERO;
        }
        let mut cache = self.cache.borrow_mut();
        let by_text = cache.entry(style.cache_key()).or_default();
        if let Some(metrics) = by_text.get(text) {
            return *metrics;
        }
        let metrics = self.measurer.measure(text, style);
        by_text.insert(String::from(text), metrics);
        metrics
    }

    /// Returns `text` truncated so that it renders within `max_width`.
    ///
    /// Text that already fits is returned unchanged; anything truncated gets
    /// an [`ELLIPSIS`] suffix. When not even one character plus the ellipsis
    /// fits, the label collapses to `"."` rather than an empty string.
    ///
    /// Each round estimates an average per-character width from the latest
    /// measurement. The estimate is only locally valid for variable-width
    /// fonts, but re-measuring every round lets the loop self-correct, and
    /// every round strictly shrinks the candidate, so the loop terminates
    /// even for a zero or negative `max_width`.
    pub fn shortened(&self, text: &str, max_width: f64, style: &TextStyle) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut keep = chars.len();
        let mut was_shortened = false;
        loop {
            let candidate: String = chars[..keep].iter().collect();
            let metrics = self.measure_text(&candidate, style);
            if metrics.width < max_width {
                return if was_shortened {
                    candidate + ELLIPSIS
                } else {
                    candidate
                };
            }
            was_shortened = true;
            if keep == 0 {
                // Even the empty string fails a non-positive budget.
                return String::from(".");
            }

            let avg_char_width = metrics.width / keep as f64;
            let overlap = metrics.width - max_width;
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "overlap is positive here, and float-to-int casts saturate"
            )]
            let cut = (overlap / avg_char_width).ceil() as usize;
            let chars_to_keep = keep.saturating_sub(cut).saturating_sub(ELLIPSIS_RESERVE);
            if chars_to_keep < 1 {
                return String::from(".");
            }
            keep = chars_to_keep;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::Cell;

    use super::*;

    /// Measures every character at a fixed width and counts real measurements.
    struct FixedWidthMeasurer {
        char_width: f64,
        calls: Cell<usize>,
    }

    impl FixedWidthMeasurer {
        fn new(char_width: f64) -> Self {
            Self {
                char_width,
                calls: Cell::new(0),
            }
        }
    }

    impl TextMeasurer for FixedWidthMeasurer {
        fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
            self.calls.set(self.calls.get() + 1);
            TextMetrics {
                width: self.char_width * text.chars().count() as f64,
                height: style.size_px(),
            }
        }
    }

    fn shortener() -> TextShortener<FixedWidthMeasurer> {
        TextShortener::new(FixedWidthMeasurer::new(8.0))
    }

    #[test]
    fn text_that_fits_is_returned_unchanged() {
        let s = shortener();
        let style = TextStyle::default();
        assert_eq!(s.shortened("Alpha", 100.0, &style), "Alpha");
    }

    #[test]
    fn shortened_text_gets_an_ellipsis_suffix() {
        let s = shortener();
        let style = TextStyle::default();
        // 20 chars at 8px = 160px; a 100px budget keeps 9 chars (72px).
        let out = s.shortened("Internationalisation", 100.0, &style);
        assert_eq!(out, "Internati...");
    }

    #[test]
    fn tiny_budget_collapses_to_a_bare_marker() {
        let s = shortener();
        let style = TextStyle::default();
        assert_eq!(s.shortened("Alpha", 1.0, &style), ".");
        assert_eq!(s.shortened("Alpha", 0.0, &style), ".");
        assert_eq!(s.shortened("Alpha", -5.0, &style), ".");
    }

    #[test]
    fn output_length_is_monotone_in_the_budget() {
        let s = shortener();
        let style = TextStyle::default();
        let budgets = [200.0, 100.0, 60.0, 33.0, 20.0, 5.0, 1.0];
        let mut last_len = usize::MAX;
        for budget in budgets {
            let out = s.shortened("Internationalisation", budget, &style);
            let len = out.chars().count();
            assert!(
                len <= last_len,
                "length grew from {last_len} to {len} at budget {budget}"
            );
            last_len = len;
        }
    }

    #[test]
    fn repeated_measurements_hit_the_cache() {
        let s = shortener();
        let style = TextStyle::default();
        let first = s.measure_text("Gamma", &style);
        let second = s.measure_text("Gamma", &style);
        assert_eq!(first, second);
        assert_eq!(s.measurer.calls.get(), 1);
    }

    #[test]
    fn distinct_styles_are_cached_separately() {
        let s = shortener();
        let arial = TextStyle::new("11px", "Arial");
        let classed = arial.clone().with_class_name("axis-label");
        s.measure_text("Gamma", &arial);
        s.measure_text("Gamma", &classed);
        assert_eq!(s.measurer.calls.get(), 2);
    }

    #[test]
    fn empty_text_skips_cache_and_measurer() {
        let s = shortener();
        let style = TextStyle::default();
        assert_eq!(s.measure_text("", &style), TextMetrics::ZERO);
        assert_eq!(s.measurer.calls.get(), 0);
    }

    #[test]
    fn shortening_reuses_measurements_across_calls() {
        let s = shortener();
        let style = TextStyle::default();
        let a = s.shortened("Internationalisation", 100.0, &style);
        let calls_after_first = s.measurer.calls.get();
        let b = s.shortened("Internationalisation", 100.0, &style);
        assert_eq!(a, b);
        assert_eq!(s.measurer.calls.get(), calls_after_first);
    }
}
