use eframe::egui::{pos2, vec2};

use super::{
    AffineTransform, DEFAULT_MAX_SCALE, ScaleBounds, TransformError, centering_translation,
    fit_scale,
};

const EPS: f32 = 1e-4;

#[test]
fn identity_maps_points_unchanged() {
    let transform = AffineTransform::IDENTITY;
    let point = pos2(13.0, -7.5);
    assert_eq!(transform.apply(point), point);
    assert_eq!(transform.unapply(point), point);
}

#[test]
fn translate_accumulates_deltas() {
    let mut transform = AffineTransform::IDENTITY;
    transform.translate(vec2(3.0, -2.0));
    transform.translate(vec2(-1.0, 5.0));
    assert_eq!(transform.translation(), vec2(2.0, 3.0));
    assert_eq!(transform.scale_x(), 1.0);
}

#[test]
fn scale_about_keeps_pivot_fixed() {
    let mut transform = AffineTransform::from_scale_translation(2.0, vec2(10.0, 20.0));
    let pivot = pos2(40.0, 60.0);
    let before = transform.apply(pivot);
    transform.scale_about(1.5, pivot);
    let after = transform.apply(pivot);
    assert!((before.x - after.x).abs() < EPS);
    assert!((before.y - after.y).abs() < EPS);
    assert!((transform.scale_x() - 3.0).abs() < EPS);
    assert!((transform.scale_y() - 3.0).abs() < EPS);
}

#[test]
fn unapply_inverts_apply() {
    let mut transform = AffineTransform::from_scale_translation(0.5, vec2(100.0, 50.0));
    transform.scale_about(2.5, pos2(30.0, 30.0));
    let point = pos2(321.0, 123.0);
    let round_trip = transform.apply(transform.unapply(point));
    assert!((round_trip.x - point.x).abs() < EPS);
    assert!((round_trip.y - point.y).abs() < EPS);
}

#[test]
fn scale_or_substitutes_fallback_for_zero() {
    let zeroed = AffineTransform::from_scale_translation(0.0, vec2(0.0, 0.0));
    assert_eq!(zeroed.scale_or(1.0), 1.0);
    assert_eq!(AffineTransform::IDENTITY.scale_or(7.0), 1.0);
}

#[test]
fn snapshot_is_a_value_copy() {
    let mut transform = AffineTransform::IDENTITY;
    let snapshot = transform;
    transform.translate(vec2(5.0, 5.0));
    assert_eq!(snapshot, AffineTransform::IDENTITY);
    assert_ne!(snapshot, transform);
}

#[test]
fn fit_scale_shrinks_wide_image() {
    // Scenario A: 2000x1000 image in a 1000x1000 viewport.
    let scale = fit_scale(vec2(2000.0, 1000.0), vec2(1000.0, 1000.0));
    assert!((scale - 0.5).abs() < EPS);
    let centering = centering_translation(vec2(2000.0, 1000.0), scale, vec2(1000.0, 1000.0));
    assert!((centering.x - 0.0).abs() < EPS);
    assert!((centering.y - 250.0).abs() < EPS);
}

#[test]
fn fit_scale_enlarges_small_image() {
    // Scenario B: 200x200 image in a 1000x1000 viewport.
    let scale = fit_scale(vec2(200.0, 200.0), vec2(1000.0, 1000.0));
    assert!((scale - 5.0).abs() < EPS);
}

#[test]
fn fit_scale_defaults_on_degenerate_sizes() {
    assert_eq!(fit_scale(vec2(0.0, 100.0), vec2(500.0, 500.0)), 1.0);
    assert_eq!(fit_scale(vec2(100.0, 100.0), vec2(0.0, 500.0)), 1.0);
    assert_eq!(fit_scale(vec2(-1.0, 100.0), vec2(500.0, 500.0)), 1.0);
}

#[test]
fn fitted_corners_stay_inside_viewport() {
    let image = vec2(2000.0, 1200.0);
    let viewport = vec2(1000.0, 1000.0);
    let scale = fit_scale(image, viewport);
    assert!(scale > 0.0);
    let centering = centering_translation(image, scale, viewport);
    let transform = AffineTransform::from_scale_translation(scale, centering);
    for corner in [
        pos2(0.0, 0.0),
        pos2(image.x, 0.0),
        pos2(0.0, image.y),
        pos2(image.x, image.y),
    ] {
        let mapped = transform.apply(corner);
        assert!(mapped.x >= -EPS && mapped.x <= viewport.x + EPS);
        assert!(mapped.y >= -EPS && mapped.y <= viewport.y + EPS);
    }
}

#[test]
fn centering_ignores_axes_without_slack() {
    let centering = centering_translation(vec2(4000.0, 100.0), 1.0, vec2(1000.0, 1000.0));
    assert_eq!(centering.x, 0.0);
    assert!((centering.y - 450.0).abs() < EPS);
}

#[test]
fn bounds_reject_inverted_and_non_positive() {
    assert!(matches!(
        ScaleBounds::new(2.0, 1.0),
        Err(TransformError::InvertedBounds { .. })
    ));
    assert!(matches!(
        ScaleBounds::new(0.0, 1.0),
        Err(TransformError::NonPositiveMinScale { .. })
    ));
    assert!(ScaleBounds::new(0.5, 5.0).is_ok());
}

#[test]
fn bounds_follow_fit_scale() {
    let shrunk = ScaleBounds::default().for_fit_scale(0.5);
    assert_eq!(shrunk.min(), 0.5);
    assert_eq!(shrunk.max(), DEFAULT_MAX_SCALE);

    let enlarged = ScaleBounds::default().for_fit_scale(5.0);
    assert_eq!(enlarged.min(), 1.0);
    assert_eq!(enlarged.max(), 5.0);

    let raised = ScaleBounds::default().for_fit_scale(8.0);
    assert_eq!(raised.min(), 1.0);
    assert_eq!(raised.max(), 8.0);
    assert!(raised.min() <= raised.max());
}

#[test]
fn fit_widens_configured_bounds_without_shrinking_them() {
    let configured = ScaleBounds::new(0.25, 10.0).expect("valid bounds");
    let fitted = configured.for_fit_scale(0.5);
    assert_eq!(fitted.min(), 0.25);
    assert_eq!(fitted.max(), 10.0);

    let fitted = configured.for_fit_scale(12.0);
    assert_eq!(fitted.min(), 0.25);
    assert_eq!(fitted.max(), 12.0);
}

#[test]
fn bounds_roundtrip_json() {
    let bounds = ScaleBounds::new(0.5, 8.0).expect("valid bounds");
    let serialized = serde_json::to_string_pretty(&bounds).expect("serialize bounds");
    let restored: ScaleBounds = serde_json::from_str(&serialized).expect("deserialize bounds");
    assert_eq!(restored, bounds);
}

#[test]
fn deserialization_rejects_invalid_bounds() {
    assert!(serde_json::from_str::<ScaleBounds>(r#"{"min":4.0,"max":2.0}"#).is_err());
    assert!(serde_json::from_str::<ScaleBounds>(r#"{"min":0.0,"max":2.0}"#).is_err());
}

#[test]
fn transform_roundtrip_json() {
    let mut transform = AffineTransform::from_scale_translation(0.5, vec2(12.0, 250.0));
    transform.scale_about(2.0, pos2(100.0, 100.0));
    let serialized = serde_json::to_string_pretty(&transform).expect("serialize transform");
    let restored: AffineTransform = serde_json::from_str(&serialized).expect("deserialize");
    assert_eq!(restored, transform);
}
