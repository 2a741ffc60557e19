#![forbid(unsafe_code)]

//! End-to-end constraint scenarios: min/max bounds, fit-parent, correction
//! carry, disabled axes and scale correction.

use pretty_assertions::assert_eq;
use resizer_core::{DisabledAttribute, Extent, Handle, Length, Point};
use resizer_engine::{ResizableConfig, StyleProperty};
use resizer_harness::{Fixture, FixtureLayout, sized};

fn layout(parent_width: f64, parent_height: f64) -> FixtureLayout {
    FixtureLayout {
        parent: Extent::new(parent_width, parent_height),
        ..FixtureLayout::default()
    }
}

fn mounted(config: ResizableConfig, layout: FixtureLayout) -> Fixture {
    let mut fixture = Fixture::with_layout(config, layout);
    fixture.mount();
    fixture
}

#[test]
fn fit_parent_stops_right_edge_at_parent() {
    let mut fixture = mounted(
        ResizableConfig {
            fit_parent: true,
            ..sized(200.0, 100.0, 30.0, 0.0)
        },
        layout(240.0, 200.0),
    );
    let moved = fixture.drag_handle(Handle::R, Point::new(100.0, 50.0), Point::new(200.0, 50.0));
    assert_eq!(fixture.box_px(), [30.0, 0.0, 210.0, 100.0]);

    let geometry = &moved.notifications[0].geometry;
    assert_eq!(geometry.width, Some(Length::Px(210.0)));
}

#[test]
fn fit_parent_from_origin_fills_parent_width() {
    let mut fixture = mounted(
        ResizableConfig {
            fit_parent: true,
            ..sized(200.0, 100.0, 0.0, 0.0)
        },
        layout(240.0, 200.0),
    );
    fixture.drag_handle(Handle::R, Point::new(100.0, 50.0), Point::new(400.0, 60.0));
    assert_eq!(fixture.box_px()[2], 240.0);
}

#[test]
fn clipped_delta_is_carried_back_on_reversal() {
    let mut fixture = mounted(
        ResizableConfig {
            fit_parent: true,
            ..sized(200.0, 100.0, 30.0, 0.0)
        },
        layout(240.0, 200.0),
    );
    fixture.press_handle(Handle::R, 100.0, 50.0);
    fixture.move_to(200.0, 50.0);
    assert_eq!(fixture.box_px()[2], 210.0);
    assert_eq!(fixture.controller.state().pending_correction(), Point::new(90.0, 0.0));

    // Coming back through the overshoot leaves the width alone.
    fixture.move_to(110.0, 50.0);
    assert_eq!(fixture.box_px()[2], 210.0);
    assert_eq!(fixture.controller.state().pending_correction(), Point::ZERO);

    fixture.move_to(100.0, 50.0);
    assert_eq!(fixture.box_px()[2], 200.0);
    fixture.release();
}

#[test]
fn right_handle_respects_min_and_max() {
    let mut fixture = Fixture::mounted(ResizableConfig {
        min_width: 120.0,
        max_width: Some(260.0),
        ..sized(200.0, 100.0, 0.0, 0.0)
    });
    fixture.drag_handle(Handle::R, Point::ZERO, Point::new(150.0, 0.0));
    assert_eq!(fixture.box_px()[2], 260.0);
    fixture.drag_handle(Handle::R, Point::ZERO, Point::new(-500.0, 0.0));
    assert_eq!(fixture.box_px()[2], 120.0);
}

#[test]
fn left_handle_min_width_keeps_right_edge() {
    let mut fixture = mounted(
        ResizableConfig {
            min_width: 120.0,
            ..sized(150.0, 100.0, 40.0, 0.0)
        },
        layout(400.0, 300.0),
    );
    fixture.drag_handle(Handle::L, Point::ZERO, Point::new(80.0, 0.0));
    let [left, _, width, _] = fixture.box_px();
    assert_eq!(width, 120.0);
    assert_eq!(left, 70.0);
    assert_eq!(left + width, 190.0);
}

#[test]
fn left_handle_growth_moves_offset_out() {
    let mut fixture = Fixture::mounted(sized(150.0, 100.0, 100.0, 0.0));
    fixture.drag_handle(Handle::L, Point::new(100.0, 0.0), Point::new(40.0, 0.0));
    assert_eq!(fixture.box_px(), [40.0, 0.0, 210.0, 100.0]);
}

#[test]
fn left_handle_max_guard_is_skipped_for_negative_offset() {
    let mut fixture = mounted(
        ResizableConfig {
            max_width: Some(150.0),
            ..sized(200.0, 100.0, -5.0, 0.0)
        },
        layout(400.0, 300.0),
    );
    // Mount clamps to the maximum first.
    assert_eq!(fixture.box_px()[2], 150.0);
    fixture.drag_handle(Handle::L, Point::new(200.0, 0.0), Point::ZERO);
    let [left, _, width, _] = fixture.box_px();
    assert!(width > 150.0, "width {width}");
    assert_eq!(left, -205.0);
}

#[test]
fn left_handle_max_guard_applies_for_positive_offset() {
    let mut fixture = mounted(
        ResizableConfig {
            max_width: Some(200.0),
            ..sized(150.0, 100.0, 100.0, 0.0)
        },
        layout(500.0, 300.0),
    );
    fixture.drag_handle(Handle::L, Point::new(100.0, 0.0), Point::ZERO);
    assert_eq!(fixture.box_px(), [50.0, 0.0, 200.0, 100.0]);
}

#[test]
fn top_handle_max_guard() {
    let mut fixture = mounted(
        ResizableConfig {
            max_height: Some(250.0),
            ..sized(150.0, 200.0, 0.0, 100.0)
        },
        layout(400.0, 400.0),
    );
    fixture.drag_handle(Handle::T, Point::new(0.0, 200.0), Point::new(0.0, 50.0));
    assert_eq!(fixture.box_px(), [0.0, 50.0, 150.0, 250.0]);
}

#[test]
fn top_handle_max_guard_is_skipped_above_viewport() {
    let mut fixture = mounted(
        ResizableConfig {
            max_height: Some(250.0),
            ..sized(150.0, 200.0, 0.0, -10.0)
        },
        layout(400.0, 400.0),
    );
    fixture.drag_handle(Handle::T, Point::new(0.0, 200.0), Point::new(0.0, 50.0));
    let [_, top, _, height] = fixture.box_px();
    assert_eq!(height, 350.0);
    assert_eq!(top, -160.0);
}

#[test]
fn top_handle_respects_min_height() {
    let mut fixture = mounted(
        ResizableConfig {
            min_height: 90.0,
            ..sized(150.0, 120.0, 0.0, 0.0)
        },
        layout(400.0, 400.0),
    );
    fixture.drag_handle(Handle::T, Point::ZERO, Point::new(0.0, 60.0));
    assert_eq!(fixture.box_px(), [0.0, 30.0, 150.0, 90.0]);
}

#[test]
fn fit_parent_stops_near_edges_at_zero() {
    let mut fixture = mounted(
        ResizableConfig {
            fit_parent: true,
            ..sized(100.0, 80.0, 20.0, 10.0)
        },
        layout(400.0, 300.0),
    );
    fixture.drag_handle(Handle::Lt, Point::new(50.0, 50.0), Point::new(0.0, 0.0));
    assert_eq!(fixture.box_px(), [0.0, 0.0, 120.0, 90.0]);
}

#[test]
fn fit_parent_bottom_edge_stops_at_parent() {
    let mut fixture = mounted(
        ResizableConfig {
            fit_parent: true,
            max_height: Some(500.0),
            ..sized(100.0, 80.0, 0.0, 100.0)
        },
        layout(400.0, 300.0),
    );
    // The max no longer fits next to the offset, so the parent decides.
    fixture.drag_handle(Handle::B, Point::ZERO, Point::new(0.0, 600.0));
    assert_eq!(fixture.box_px(), [0.0, 100.0, 100.0, 200.0]);
}

#[test]
fn corner_handle_solves_both_axes() {
    let mut fixture = Fixture::mounted(ResizableConfig {
        min_width: 60.0,
        max_height: Some(150.0),
        ..sized(100.0, 100.0, 50.0, 50.0)
    });
    fixture.drag_handle(Handle::Lb, Point::new(50.0, 150.0), Point::new(120.0, 220.0));
    // Left edge clipped by the min width, bottom edge by the max height.
    assert_eq!(fixture.box_px(), [90.0, 50.0, 60.0, 150.0]);
    assert_eq!(
        fixture.controller.state().pending_correction(),
        Point::new(30.0, 20.0),
        "release keeps the carry until the next press"
    );
}

#[test]
fn drag_moves_box_and_keeps_size() {
    let mut fixture = Fixture::mounted(ResizableConfig {
        drag_selector: Some(".title".into()),
        ..sized(100.0, 80.0, 10.0, 10.0)
    });
    let before = fixture.box_px();
    fixture.drag_through(
        fixture.title,
        Point::new(20.0, 20.0),
        &[Point::new(40.0, 30.0), Point::new(70.0, 10.0)],
    );
    let after = fixture.box_px();
    assert_eq!(after[0], before[0] + 50.0);
    assert_eq!(after[1], before[1] - 10.0);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[3], before[3]);
}

#[test]
fn fit_parent_drag_stays_inside() {
    let mut fixture = Fixture::mounted(ResizableConfig {
        drag_selector: Some(".title".into()),
        fit_parent: true,
        ..sized(100.0, 80.0, 10.0, 10.0)
    });
    fixture.drag_through(fixture.title, Point::ZERO, &[Point::new(1000.0, 1000.0)]);
    assert_eq!(fixture.box_px(), [220.0, 160.0, 100.0, 80.0]);
    fixture.drag_through(fixture.title, Point::ZERO, &[Point::new(-1000.0, -1000.0)]);
    assert_eq!(fixture.box_px(), [0.0, 0.0, 100.0, 80.0]);
}

#[test]
fn disabled_axes_are_frozen_and_hidden() {
    let mut fixture = Fixture::mounted(ResizableConfig {
        disable_attributes: vec![DisabledAttribute::W, DisabledAttribute::L],
        ..sized(200.0, 120.0, 20.0, 20.0)
    });
    fixture.drag_handle(Handle::Lb, Point::ZERO, Point::new(-10.0, 30.0));

    let [left, _, width, height] = fixture.box_px();
    assert_eq!(left, 20.0);
    assert_eq!(width, 200.0);
    assert_eq!(height, 150.0);

    let style = fixture.controller.style();
    assert!(style.get(StyleProperty::Width).is_none());
    assert!(style.get(StyleProperty::Left).is_none());
    assert_eq!(style.get(StyleProperty::Height), Some("150px"));
    assert_eq!(fixture.style(), "height: 150px; top: 20px");
}

#[test]
fn scale_correction_divides_pointer_delta() {
    let mut fixture = Fixture::mounted(sized(200.0, 120.0, 0.0, 0.0));
    fixture.set_scale(2.0);
    fixture.drag_handle(Handle::Rb, Point::ZERO, Point::new(100.0, 40.0));
    assert_eq!(fixture.box_px(), [0.0, 0.0, 250.0, 140.0]);
}

#[test]
fn unmeasurable_host_uses_unit_scale() {
    let mut fixture = Fixture::mounted(sized(200.0, 120.0, 0.0, 0.0));
    fixture.set_scale(0.0);
    fixture.drag_handle(Handle::R, Point::ZERO, Point::new(30.0, 30.0));
    assert_eq!(fixture.box_px()[2], 230.0);
}

#[test]
fn raw_auto_size_is_pinned_to_rendered_size_before_resizing() {
    let mut fixture = Fixture::mounted(ResizableConfig {
        width: Some(Length::raw("auto")),
        height: Some(Length::raw("auto")),
        ..ResizableConfig::default()
    });
    assert_eq!(fixture.controller.state().width(), Some(&Length::raw("auto")));

    fixture.drag_handle(Handle::R, Point::ZERO, Point::new(10.0, 0.0));
    assert_eq!(fixture.box_px(), [0.0, 0.0, 210.0, 120.0]);
}
