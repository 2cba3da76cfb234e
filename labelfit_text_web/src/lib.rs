// Copyright 2026 the LabelFit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web/WASM text measurement adapter.
//!
//! This crate provides a [`labelfit_text::TextMeasurer`] implementation for
//! `wasm32-*` targets by rendering each string into a transient SVG `<text>`
//! node and reading its bounding box.
//!
//! Notes:
//! - The measuring surface must stay renderable (`display: none` measures as
//!   zero), so it lives far outside the viewport instead of being hidden.
//! - Only vector (SVG) rendering surfaces are supported; measuring against
//!   other backends is undefined and not checked for.
//! - This uses `web-sys`/`wasm-bindgen` only on `wasm32` targets.
//!   Non-`wasm32` builds fall back to a heuristic measurer.

#![no_std]

extern crate alloc;

use labelfit_text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};

#[cfg(target_arch = "wasm32")]
const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A `wasm32` measurer backed by an off-screen SVG surface.
///
/// Each measurement appends a `<text>` node to the surface, reads its
/// bounding box, and removes the node again on all exit paths, so failed
/// measurements cannot leak nodes into the document.
///
/// On non-`wasm32` targets, this type is still available but always falls
/// back to [`HeuristicTextMeasurer`].
#[derive(Clone, Debug)]
pub struct SvgTextMeasurer {
    #[cfg(target_arch = "wasm32")]
    document: web_sys::Document,
    #[cfg(target_arch = "wasm32")]
    surface: web_sys::Element,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SvgTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgTextMeasurer {
    /// Creates a measurer with its own off-screen SVG surface.
    ///
    /// The surface is appended to the document body and positioned far
    /// outside the visible canvas, so it never causes flicker or affects
    /// layout. It stays alive for the lifetime of the measurer; only the
    /// per-measurement `<text>` nodes are transient. This requires a
    /// browser-like environment with `window` and `document`.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, wasm_bindgen::JsValue> {
        let window = web_sys::window()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("labelfit_text_web: missing window"))?;
        let document = window.document().ok_or_else(|| {
            wasm_bindgen::JsValue::from_str("labelfit_text_web: missing document")
        })?;
        let body = document
            .body()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("labelfit_text_web: missing body"))?;

        let surface = document.create_element_ns(Some(SVG_NS), "svg")?;
        surface.set_attribute("style", "position: absolute; left: -9999px; top: -9999px;")?;
        surface.set_attribute("aria-hidden", "true")?;
        body.append_child(&surface)?;
        Ok(Self { document, surface })
    }

    /// Creates a non-web measurer that always falls back to heuristics.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(target_arch = "wasm32")]
    fn measure_svg(
        &self,
        text: &str,
        style: &TextStyle,
    ) -> Result<TextMetrics, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let node = self.document.create_element_ns(Some(SVG_NS), "text")?;
        if let Some(class) = &style.class_name {
            node.set_attribute("class", class)?;
        }
        node.set_attribute("style", &style.css())?;
        node.set_text_content(Some(text));
        self.surface.append_child(&node)?;
        let _detach = DetachOnDrop { node: &node };

        let graphics: &web_sys::SvgGraphicsElement = node.dyn_ref().ok_or_else(|| {
            wasm_bindgen::JsValue::from_str("labelfit_text_web: not an SVG graphics element")
        })?;
        let bbox = graphics.get_b_box()?;
        Ok(TextMetrics {
            width: f64::from(bbox.width()),
            height: f64::from(bbox.height()),
        })
    }
}

/// Detaches the measured node when dropped, including on error paths.
#[cfg(target_arch = "wasm32")]
struct DetachOnDrop<'a> {
    node: &'a web_sys::Element,
}

#[cfg(target_arch = "wasm32")]
impl Drop for DetachOnDrop<'_> {
    fn drop(&mut self) {
        self.node.remove();
    }
}

impl TextMeasurer for SvgTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::ZERO;
        }

        #[cfg(target_arch = "wasm32")]
        {
            match self.measure_svg(text, style) {
                Ok(metrics) => metrics,
                Err(_) => HeuristicTextMeasurer.measure(text, style),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        HeuristicTextMeasurer.measure(text, style)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn non_wasm_builds_fall_back_to_heuristics() {
        let measurer = SvgTextMeasurer::new();
        let style = TextStyle::new("10px", "Arial");
        assert_eq!(
            measurer.measure("abc", &style),
            HeuristicTextMeasurer.measure("abc", &style)
        );
    }

    #[test]
    fn empty_text_measures_as_zero() {
        let measurer = SvgTextMeasurer::new();
        assert_eq!(
            measurer.measure("", &TextStyle::default()),
            TextMetrics::ZERO
        );
    }
}
