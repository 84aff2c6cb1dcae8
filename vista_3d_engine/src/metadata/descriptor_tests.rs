use glam::Vec3;
use super::*;

fn sample_json() -> &'static str {
    r#"{
        "id": "station-home",
        "category": "station",
        "file": "models/station-home.scene.json",
        "scale": [1.0, 1.0, 1.0],
        "position": [0.0, 0.5, 0.0],
        "rotation": [0.0, 1.5707964, 0.0],
        "section": "home",
        "visibility": { "default": false, "fadeIn": true },
        "animation": { "type": "idle", "params": { "duration": 6.0 } }
    }"#
}

// ============================================================================
// Deserialization
// ============================================================================

#[test]
fn test_descriptor_full_document() {
    let descriptor: AssetDescriptor = serde_json::from_str(sample_json()).unwrap();

    assert_eq!(descriptor.id, "station-home");
    assert_eq!(descriptor.category, "station");
    assert_eq!(descriptor.file, "models/station-home.scene.json");
    assert_eq!(descriptor.scale, Vec3::ONE);
    assert_eq!(descriptor.position, Vec3::new(0.0, 0.5, 0.0));
    assert_eq!(descriptor.section, "home");

    let visibility = descriptor.visibility.unwrap();
    assert!(!visibility.default_visible);
    assert!(visibility.fade_in);
    assert!(!visibility.fade_out);

    let animation = descriptor.animation.unwrap();
    assert_eq!(animation.kind, AnimationKind::Idle);
    assert_eq!(animation.param_f32("duration", 4.0), 6.0);
}

#[test]
fn test_descriptor_minimal_document() {
    let descriptor: AssetDescriptor = serde_json::from_str(
        r#"{
            "id": "a",
            "category": "misc",
            "file": "a.scene.json",
            "scale": [2.0, 2.0, 2.0],
            "position": [0.0, 0.0, 0.0],
            "rotation": [0.0, 0.0, 0.0],
            "section": "home"
        }"#,
    )
    .unwrap();

    assert!(descriptor.visibility.is_none());
    assert!(descriptor.animation.is_none());
    // No flags at all means visible by default.
    assert!(descriptor.default_visible());
}

#[test]
fn test_animation_kind_names() {
    let idle: AnimationKind = serde_json::from_str("\"idle\"").unwrap();
    let looped: AnimationKind = serde_json::from_str("\"loop\"").unwrap();
    let triggered: AnimationKind = serde_json::from_str("\"scroll_triggered\"").unwrap();
    let triggered_camel: AnimationKind = serde_json::from_str("\"scrollTriggered\"").unwrap();

    assert_eq!(idle, AnimationKind::Idle);
    assert_eq!(looped, AnimationKind::Loop);
    assert_eq!(triggered, AnimationKind::ScrollTriggered);
    assert_eq!(triggered_camel, AnimationKind::ScrollTriggered);
}

#[test]
fn test_unknown_animation_kind_rejected() {
    assert!(serde_json::from_str::<AnimationKind>("\"wobble\"").is_err());
}

// ============================================================================
// Parameter lookup
// ============================================================================

#[test]
fn test_param_lookup_fallbacks() {
    let directive: AnimationDirective = serde_json::from_str(
        r#"{ "type": "loop", "params": { "duration": 2.5, "ease": "linear" } }"#,
    )
    .unwrap();

    assert_eq!(directive.param_f32("duration", 2.0), 2.5);
    assert_eq!(directive.param_f32("missing", 2.0), 2.0);
    assert_eq!(directive.param_str("ease"), Some("linear"));
    assert_eq!(directive.param_str("missing"), None);
}

#[test]
fn test_directive_without_params() {
    let directive: AnimationDirective = serde_json::from_str(r#"{ "type": "idle" }"#).unwrap();
    assert_eq!(directive.param_f32("duration", 4.0), 4.0);
}
