// Copyright 2026 the LabelFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for axis label fitting.
//!
//! Label fitting needs to know how wide a candidate label renders before it
//! can decide how much of it to keep. Measurement itself is platform work
//! (an off-screen SVG node in a browser, a shaping engine on native), so the
//! fitting code depends only on the tiny measurement interface defined here.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned style strings), and
//! - renderer-agnostic (a real rendering surface and a heuristic stand-in
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// A minimal text measurement interface used by label fitting.
///
/// Implementations must be deterministic for a fixed (text, style) pair
/// within one session; downstream caching relies on measured values staying
/// valid (no font reflow mid-session).
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate), or
/// - backed by a real rendering surface (e.g. an off-screen SVG text node).
pub trait TextMeasurer {
    /// Measure a single line of text under `style`.
    ///
    /// Empty `text` must return [`TextMetrics::ZERO`] without touching the
    /// rendering surface.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Styling inputs relevant to one measurement.
///
/// Sizes keep their CSS unit (e.g. `"11px"`) because the style participates
/// in a cache key and is ultimately applied to a rendered node verbatim; the
/// numeric value is only needed by heuristics, via [`TextStyle::size_px`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextStyle {
    /// Font size with CSS unit, e.g. `"11px"`.
    pub font_size: String,
    /// Font family (a single family or a CSS fallback list).
    pub font_family: String,
    /// Optional class applied to the measured node.
    pub class_name: Option<String>,
}

impl TextStyle {
    /// Creates a style with the given size and family and no class.
    #[must_use]
    pub fn new(font_size: impl Into<String>, font_family: impl Into<String>) -> Self {
        Self {
            font_size: font_size.into(),
            font_family: font_family.into(),
            class_name: None,
        }
    }

    /// Sets the class name applied while measuring.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// The inline CSS declaration list applied to the measured node.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "font-size: {}; font-family: {};",
            self.font_size, self.font_family
        )
    }

    /// A stable key identifying this style for measurement caching.
    ///
    /// Texts measured under the style are keyed separately by the cache.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let class = self.class_name.as_deref().unwrap_or("");
        format!("{}|{class}", self.css())
    }

    /// The font size in pixels, parsed from the size's numeric prefix.
    ///
    /// A missing or malformed size falls back to `11.0` rather than failing.
    #[must_use]
    pub fn size_px(&self) -> f64 {
        let digits: &str = self
            .font_size
            .trim_start()
            .split(|c: char| !c.is_ascii_digit() && c != '.')
            .next()
            .unwrap_or("");
        digits.parse().unwrap_or(11.0)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new("11px", "sans-serif")
    }
}

/// Measured extents for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Rendered width in pixels.
    pub width: f64,
    /// Rendered height in pixels.
    pub height: f64,
}

impl TextMetrics {
    /// Zero extents, returned for empty text.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em and a line height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::ZERO;
        }
        let size = style.size_px();
        TextMetrics {
            width: 0.6 * size * text.chars().count() as f64,
            height: size,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn size_px_parses_numeric_prefix() {
        assert_eq!(TextStyle::new("11px", "Arial").size_px(), 11.0);
        assert_eq!(TextStyle::new("9.5px", "Arial").size_px(), 9.5);
    }

    #[test]
    fn size_px_falls_back_on_malformed_sizes() {
        assert_eq!(TextStyle::new("large", "Arial").size_px(), 11.0);
        assert_eq!(TextStyle::new("", "Arial").size_px(), 11.0);
    }

    #[test]
    fn cache_key_includes_css_and_class() {
        let plain = TextStyle::new("11px", "Arial");
        let classed = plain.clone().with_class_name("axis-label");
        assert_eq!(plain.cache_key(), "font-size: 11px; font-family: Arial;|");
        assert_eq!(
            classed.cache_key(),
            "font-size: 11px; font-family: Arial;|axis-label"
        );
        assert_ne!(plain.cache_key(), classed.cache_key());
    }

    #[test]
    fn heuristic_measures_empty_text_as_zero() {
        let style = TextStyle::default();
        assert_eq!(HeuristicTextMeasurer.measure("", &style), TextMetrics::ZERO);
    }

    #[test]
    fn heuristic_width_grows_with_text_and_size() {
        let small = TextStyle::new("10px", "Arial");
        let large = TextStyle::new("20px", "Arial");
        let a = HeuristicTextMeasurer.measure("abc", &small);
        let b = HeuristicTextMeasurer.measure("abcdef", &small);
        let c = HeuristicTextMeasurer.measure("abc", &large);
        assert!(b.width > a.width);
        assert!(c.width > a.width);
        assert_eq!(a.height, 10.0);
    }
}
