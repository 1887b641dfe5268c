//! Overlay placement: turn an [`OverlayConfig`] plus the finished image's
//! pixel dimensions into concrete compositing geometry. The downstream
//! compositor consumes the `(bytes, placement)` pair; no drawing happens
//! here.

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{HooklabError, HooklabResult};
use crate::hypothesis::model::{OverlayAlign, OverlayConfig};

/// Fraction of the image width the text band may occupy.
const BAND_WIDTH_FRACTION: f64 = 0.9;

/// Font size relative to image width at `font_scale == 100`.
const FONT_WIDTH_FRACTION: f64 = 0.15;

/// Line height multiplier over the font size.
const LINE_HEIGHT: f64 = 1.2;

/// Concrete compositing geometry for one overlay on one image.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayPlacement {
    /// Band rectangle the text line occupies, in pixel coordinates.
    pub band: Rect,
    /// Text anchor point per the configured alignment.
    pub anchor: Point,
    /// Font size in pixels.
    pub font_px: f64,
}

/// Compute overlay geometry from the encoded image bytes.
///
/// Decodes only the image header for dimensions; fails if the bytes are not
/// a decodable image.
pub fn overlay_placement(
    image_bytes: &[u8],
    overlay: &OverlayConfig,
) -> HooklabResult<OverlayPlacement> {
    let img = image::load_from_memory(image_bytes)
        .map_err(|e| HooklabError::export(format!("cannot decode artifact image: {e}")))?;
    Ok(placement_for_dimensions(
        f64::from(img.width()),
        f64::from(img.height()),
        overlay,
    ))
}

/// Overlay geometry for known pixel dimensions.
pub fn placement_for_dimensions(
    width: f64,
    height: f64,
    overlay: &OverlayConfig,
) -> OverlayPlacement {
    let y = (overlay.y_position / 100.0).clamp(0.0, 1.0) * height;
    let font_px = width * (overlay.font_scale / 100.0) * FONT_WIDTH_FRACTION;
    let band_half = font_px * LINE_HEIGHT / 2.0;
    let margin = width * (1.0 - BAND_WIDTH_FRACTION) / 2.0;

    let anchor_x = match overlay.align {
        OverlayAlign::Left => margin,
        OverlayAlign::Center => width / 2.0,
        OverlayAlign::Right => width - margin,
    };

    OverlayPlacement {
        band: Rect::new(margin, y - band_half, width - margin, y + band_half),
        anchor: Point::new(anchor_x, y),
        font_px,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/overlay.rs"]
mod tests;
