use approx::assert_relative_eq;

use meme_core::error::MemeError;
use meme_core::geometry::{fit, Size};

const EPS: f64 = 1e-9;

#[test]
fn test_fit_wide_image() {
    let r = fit(Size::new(400.0, 300.0), Size::new(800.0, 400.0)).unwrap();
    assert_relative_eq!(r.width, 400.0);
    assert_relative_eq!(r.height, 200.0);
    assert_relative_eq!(r.start_x, 0.0);
    assert_relative_eq!(r.start_y, 50.0);
}

#[test]
fn test_fit_tall_image() {
    let r = fit(Size::new(400.0, 300.0), Size::new(300.0, 600.0)).unwrap();
    assert_relative_eq!(r.width, 150.0);
    assert_relative_eq!(r.height, 300.0);
    assert_relative_eq!(r.start_x, 125.0);
    assert_relative_eq!(r.start_y, 0.0);
}

#[test]
fn test_fit_square_image_on_wide_canvas() {
    let r = fit(Size::new(400.0, 300.0), Size::new(100.0, 100.0)).unwrap();
    assert_relative_eq!(r.width, 300.0);
    assert_relative_eq!(r.height, 300.0);
    assert_relative_eq!(r.start_x, 50.0);
    assert_relative_eq!(r.start_y, 0.0);
}

#[test]
fn test_fit_square_image_on_square_canvas_fills_width() {
    let r = fit(Size::new(400.0, 400.0), Size::new(640.0, 640.0)).unwrap();
    assert_relative_eq!(r.width, 400.0);
    assert_relative_eq!(r.height, 400.0);
    assert_relative_eq!(r.start_x, 0.0);
    assert_relative_eq!(r.start_y, 0.0);
}

#[test]
fn test_fit_same_aspect_as_canvas() {
    let r = fit(Size::new(400.0, 300.0), Size::new(1600.0, 1200.0)).unwrap();
    assert_relative_eq!(r.width, 400.0);
    assert_relative_eq!(r.height, 300.0);
    assert_relative_eq!(r.start_x, 0.0);
    assert_relative_eq!(r.start_y, 0.0);
}

#[test]
fn test_fit_upscales_small_images() {
    let r = fit(Size::new(400.0, 400.0), Size::new(20.0, 10.0)).unwrap();
    assert_relative_eq!(r.width, 400.0);
    assert_relative_eq!(r.height, 200.0);
    assert_relative_eq!(r.start_y, 100.0);
}

#[test]
fn test_fit_properties_over_grid() {
    let canvases = [
        (400.0, 400.0),
        (400.0, 300.0),
        (300.0, 400.0),
        (1920.0, 1080.0),
        (1.0, 7.0),
    ];
    let images = [
        (1.0, 1.0),
        (800.0, 400.0),
        (300.0, 600.0),
        (4000.0, 3000.0),
        (3000.0, 4000.0),
        (17.0, 3.0),
        (3.0, 17.0),
        (1080.0, 1920.0),
        (999.0, 1000.0),
    ];

    for &(cw, ch) in &canvases {
        for &(iw, ih) in &images {
            let r = fit(Size::new(cw, ch), Size::new(iw, ih)).unwrap();

            // Contained, touching at least one edge.
            assert!(r.width <= cw + EPS, "{cw}x{ch} / {iw}x{ih}: {r:?}");
            assert!(r.height <= ch + EPS, "{cw}x{ch} / {iw}x{ih}: {r:?}");
            assert!(r.start_x >= -EPS && r.start_y >= -EPS, "{r:?}");
            assert!(r.right() <= cw + EPS && r.bottom() <= ch + EPS, "{r:?}");
            assert!(
                (r.width - cw).abs() < EPS || (r.height - ch).abs() < EPS,
                "{cw}x{ch} / {iw}x{ih}: no edge touched: {r:?}"
            );

            // Aspect ratio preserved.
            assert!((r.width / r.height - iw / ih).abs() < 1e-9, "{r:?}");

            // Centered: slack split evenly on both axes.
            assert!((r.start_x - (cw - r.width) / 2.0).abs() < EPS, "{r:?}");
            assert!((r.start_y - (ch - r.height) / 2.0).abs() < EPS, "{r:?}");
        }
    }
}

#[test]
fn test_fit_rejects_invalid_dimensions() {
    let bad = [0.0, -1.0, f64::NAN, f64::INFINITY];
    for &v in &bad {
        assert!(matches!(
            fit(Size::new(400.0, 300.0), Size::new(v, 100.0)),
            Err(MemeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            fit(Size::new(400.0, 300.0), Size::new(100.0, v)),
            Err(MemeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            fit(Size::new(v, 300.0), Size::new(100.0, 100.0)),
            Err(MemeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            fit(Size::new(400.0, v), Size::new(100.0, 100.0)),
            Err(MemeError::InvalidDimensions { .. })
        ));
    }
}

#[test]
fn test_fit_pixel_placement_rounds() {
    let r = fit(Size::new(400.0, 400.0), Size::new(3.0, 7.0)).unwrap();
    let px = r.to_pixels();
    assert_eq!(px.height, 400);
    assert_eq!(px.width, 171);
    assert_eq!(px.x, 114);
    assert_eq!(px.y, 0);
}
