use super::*;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::new(width, height);
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn placement_centers_on_the_configured_height() {
    let overlay = OverlayConfig::for_hook("h");
    let placement = placement_for_dimensions(1000.0, 2000.0, &overlay);

    // y_position 50 of a 2000px image.
    assert_eq!(placement.anchor.y, 1000.0);
    assert_eq!(placement.anchor.x, 500.0);
    // font_scale 40 against a 1000px width.
    assert_eq!(placement.font_px, 1000.0 * 0.4 * 0.15);
    // Band spans the width minus a 5% margin each side.
    assert_eq!(placement.band.x0, 50.0);
    assert_eq!(placement.band.x1, 950.0);
    assert!((placement.band.y1 - placement.band.y0 - placement.font_px * 1.2).abs() < 1e-9);
}

#[test]
fn y_position_is_clamped_to_the_image() {
    let mut overlay = OverlayConfig::for_hook("h");
    overlay.y_position = 250.0;
    let placement = placement_for_dimensions(100.0, 100.0, &overlay);
    assert_eq!(placement.anchor.y, 100.0);

    overlay.y_position = -10.0;
    let placement = placement_for_dimensions(100.0, 100.0, &overlay);
    assert_eq!(placement.anchor.y, 0.0);
}

#[test]
fn alignment_moves_the_anchor_between_margins() {
    let mut overlay = OverlayConfig::for_hook("h");

    overlay.align = OverlayAlign::Left;
    assert_eq!(placement_for_dimensions(1000.0, 1000.0, &overlay).anchor.x, 50.0);

    overlay.align = OverlayAlign::Center;
    assert_eq!(placement_for_dimensions(1000.0, 1000.0, &overlay).anchor.x, 500.0);

    overlay.align = OverlayAlign::Right;
    assert_eq!(placement_for_dimensions(1000.0, 1000.0, &overlay).anchor.x, 950.0);
}

#[test]
fn placement_reads_dimensions_from_encoded_bytes() {
    let overlay = OverlayConfig::for_hook("h");
    let bytes = png_bytes(640, 360);
    let placement = overlay_placement(&bytes, &overlay).unwrap();
    assert_eq!(placement.anchor, Point::new(320.0, 180.0));
}

#[test]
fn undecodable_bytes_surface_an_export_error() {
    let overlay = OverlayConfig::for_hook("h");
    let err = overlay_placement(&[0x00, 0x01, 0x02], &overlay).unwrap_err();
    assert!(matches!(err, HooklabError::Export(_)));
}
