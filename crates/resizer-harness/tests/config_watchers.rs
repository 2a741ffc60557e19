#![forbid(unsafe_code)]

//! Configuration loading and live configuration updates on a mounted
//! controller.

use pretty_assertions::assert_eq;
use resizer_core::{AxisMask, DisabledAttribute, Handle, Length, NotificationKind, Point, SizeBounds};
use resizer_engine::{IgnoredReason, InteractionMode, LifecyclePhase, ResizableConfig, StyleProperty};
use resizer_harness::{Fixture, sized};

fn bounded() -> ResizableConfig {
    ResizableConfig {
        min_width: 50.0,
        min_height: 50.0,
        max_width: Some(500.0),
        max_height: Some(500.0),
        ..sized(200.0, 120.0, 0.0, 0.0)
    }
}

#[test]
fn update_copies_bounds_and_numeric_box_fields() {
    let mut fixture = Fixture::mounted(bounded());
    fixture.take_notifications();

    let dispatch = fixture.update_config(|config| {
        config.max_width = Some(260.0);
        config.max_height = Some(300.0);
        config.min_width = 120.0;
        config.min_height = 70.0;
        config.width = Some(Length::raw("80%"));
        config.height = Some(Length::Px(140.0));
        config.left = Length::Px(40.0);
        config.top = Length::Px(60.0);
        config.disable_attributes = vec![DisabledAttribute::H];
    });
    assert_eq!(dispatch.log.phase, LifecyclePhase::ConfigUpdate);
    assert!(dispatch.notifications.is_empty());

    let state = fixture.controller.state();
    assert_eq!(
        state.bounds(),
        SizeBounds {
            min_width: 120.0,
            min_height: 70.0,
            max_width: Some(260.0),
            max_height: Some(300.0),
        }
    );
    // The raw width is not applied to the box.
    assert_eq!(fixture.box_px(), [40.0, 60.0, 200.0, 140.0]);
    assert!(!state.axis_mask().contains(AxisMask::HEIGHT));
    assert!(state.axis_mask().contains(AxisMask::WIDTH | AxisMask::LEFT | AxisMask::TOP));
    assert!(fixture.controller.style().get(StyleProperty::Height).is_none());
}

#[test]
fn unchanged_fields_do_not_overwrite_gesture_results() {
    let mut fixture = Fixture::mounted(bounded());
    fixture.drag_handle(Handle::R, Point::ZERO, Point::new(30.0, 0.0));
    assert_eq!(fixture.box_px()[2], 230.0);

    // Width in the config is still 200; only fields that change are applied.
    fixture.update_config(|config| config.fit_parent = true);
    assert_eq!(fixture.box_px()[2], 230.0);
}

#[test]
fn tighter_bounds_apply_on_the_next_move() {
    let mut fixture = Fixture::mounted(bounded());
    fixture.update_config(|config| config.max_width = Some(150.0));
    assert_eq!(fixture.box_px()[2], 200.0);

    fixture.drag_handle(Handle::R, Point::ZERO, Point::new(10.0, 0.0));
    assert_eq!(fixture.box_px()[2], 150.0);
}

#[test]
fn drag_selector_change_is_reevaluated() {
    let mut fixture = Fixture::mounted(bounded());
    assert!(fixture.controller.drag_regions().is_empty());
    assert_eq!(
        fixture.press(fixture.title, 0.0, 0.0).ignored_reason(),
        Some(IgnoredReason::NoHotspot)
    );

    fixture.update_config(|config| config.drag_selector = Some(".content .title".into()));
    assert_eq!(fixture.controller.drag_regions(), &[fixture.title]);
    assert_eq!(
        fixture.press(fixture.title, 0.0, 0.0).log.mode_after,
        InteractionMode::Dragging
    );
    fixture.release();

    fixture.update_config(|config| config.drag_selector = Some("   ".into()));
    assert!(fixture.controller.drag_regions().is_empty());
}

#[test]
fn maximize_toggle_through_config_notifies() {
    let mut fixture = Fixture::mounted(sized(180.0, 90.0, 25.0, 30.0));
    fixture.take_notifications();

    let on = fixture.update_config(|config| config.maximize = true);
    assert_eq!(on.notification_kinds(), vec![NotificationKind::Maximize]);
    assert_eq!(on.notifications[0].maximize_state, Some(true));
    assert_eq!(fixture.box_px(), [0.0, 0.0, 320.0, 240.0]);
    assert!(fixture.rendered_handles().is_empty());

    let off = fixture.update_config(|config| config.maximize = false);
    assert_eq!(off.notifications[0].maximize_state, Some(false));
    assert_eq!(fixture.box_px(), [25.0, 30.0, 180.0, 90.0]);
    assert_eq!(fixture.rendered_handles().len(), 8);
}

#[test]
fn active_handles_update_rerenders_handles() {
    let mut fixture = Fixture::mounted(bounded());
    fixture.update_config(|config| config.active = vec![Handle::Lt, Handle::Rb]);
    assert_eq!(fixture.rendered_handles(), vec![Handle::Lt, Handle::Rb]);
    assert_eq!(
        fixture.press_handle(Handle::R, 0.0, 0.0).ignored_reason(),
        Some(IgnoredReason::TargetMissing)
    );
}

#[test]
fn update_before_mount_is_stored() {
    let mut fixture = Fixture::new(bounded());
    let dispatch = fixture.update_config(|config| config.maximize = true);
    assert!(!dispatch.is_ignored());
    assert!(dispatch.notifications.is_empty());

    fixture.mount();
    assert_eq!(
        fixture.notification_kinds(),
        vec![NotificationKind::Mount, NotificationKind::Maximize]
    );
}

#[test]
fn json_config_drives_a_fixture() {
    let config = ResizableConfig::from_json_str(
        r#"{
            "width": 200,
            "height": "auto",
            "minWidth": 50,
            "active": ["r", "b"],
            "fitParent": true,
            "dragSelector": ".title",
            "disableAttributes": ["t"]
        }"#,
    )
    .expect("valid config");
    assert!(config.validate().is_empty());

    let mut fixture = Fixture::mounted(config);
    assert_eq!(fixture.rendered_handles(), vec![Handle::R, Handle::B]);
    assert_eq!(fixture.controller.state().height(), Some(&Length::raw("auto")));
    assert_eq!(fixture.style(), "width: 200px; height: auto; left: 0px");

    fixture.drag_handle(Handle::B, Point::ZERO, Point::new(0.0, 500.0));
    assert_eq!(fixture.box_px(), [0.0, 0.0, 200.0, 240.0]);
}

#[test]
fn toml_config_drives_a_fixture() {
    let config = ResizableConfig::from_toml_str(
        r#"
width = 150
height = 100
left = 10
top = "auto"
maxWidth = 180
active = ["l", "lt"]
"#,
    )
    .expect("valid config");

    let mut fixture = Fixture::mounted(config);
    // A raw top is replaced by the rendered offset.
    assert_eq!(fixture.box_px(), [10.0, 0.0, 150.0, 100.0]);
    fixture.drag_handle(Handle::L, Point::new(10.0, 0.0), Point::new(-40.0, 0.0));
    assert_eq!(fixture.box_px(), [-20.0, 0.0, 180.0, 100.0]);
}

#[test]
fn advisories_do_not_block_mounting() {
    let config = ResizableConfig {
        min_width: 300.0,
        max_width: Some(100.0),
        active: vec![Handle::R, Handle::R],
        ..sized(200.0, 120.0, 0.0, 0.0)
    };
    assert_eq!(config.validate().len(), 2);
    assert!(config.clone().validated().is_err());

    let fixture = Fixture::mounted(config);
    assert!(fixture.controller.is_mounted());
    // Max wins when bounds conflict.
    assert_eq!(fixture.box_px()[2], 100.0);
}
