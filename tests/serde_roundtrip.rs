use egui::{pos2, vec2, Rect};
use egui_anchored_sheet::{
    AnchorSnapshot, SettingsInteraction, SettingsSheet, SheetAlignment, SheetConstraints,
};

#[test]
fn test_serialize_deserialize_settings() {
    let settings = SettingsSheet::new()
        .with_wide_width(400.)
        .with_compact_width_factor(0.5);
    let json = serde_json::to_string(&settings).expect("serialize settings");
    let settings2: SettingsSheet = serde_json::from_str(&json).expect("deserialize settings");
    assert_eq!(settings2, settings);

    let interactions = SettingsInteraction::new().with_dismiss_on_click_outside(false);
    let json = serde_json::to_string(&interactions).expect("serialize interactions");
    let interactions2: SettingsInteraction =
        serde_json::from_str(&json).expect("deserialize interactions");
    assert_eq!(interactions2, interactions);
}

#[test]
fn test_settings_from_config() {
    let json = r#"{"wide_width":360.0,"narrow_width":200.0,"compact_width_factor":0.6,"max_height_factor":0.9}"#;
    let settings: SettingsSheet = serde_json::from_str(json).expect("deserialize settings");
    assert_eq!(settings.wide_width, 360.);
    assert_eq!(settings.resolve_width(300.), 200.);
}

#[test]
fn test_serialize_deserialize_anchor() {
    let sized = AnchorSnapshot::from_rect(Rect::from_min_size(pos2(1., 2.), vec2(3., 4.)));
    let json = serde_json::to_string(&sized).expect("serialize anchor");
    let sized2: AnchorSnapshot = serde_json::from_str(&json).expect("deserialize anchor");
    assert_eq!(sized2, sized);

    let point = AnchorSnapshot::at(pos2(5., 6.));
    let json = serde_json::to_string(&point).expect("serialize anchor");
    let point2: AnchorSnapshot = serde_json::from_str(&json).expect("deserialize anchor");
    assert!(!point2.has_size());
    assert_eq!(point2.position(), point.position());
}

#[test]
fn test_serialize_deserialize_alignment_and_constraints() {
    let alignment = SheetAlignment::new(-0.5, 1.);
    let json = serde_json::to_string(&alignment).expect("serialize alignment");
    assert_eq!(json, r#"{"x":-0.5,"y":1.0}"#);

    let constraints = SheetConstraints {
        min: vec2(240., 0.),
        max: vec2(240., 320.),
    };
    let json = serde_json::to_string(&constraints).expect("serialize constraints");
    let constraints2: SheetConstraints =
        serde_json::from_str(&json).expect("deserialize constraints");
    assert_eq!(constraints2, constraints);
}
