use scrollpanel::{
    initialize, Document, DragState, Input, Listeners, MouseButton, PanelConfig, PanelGeometry,
    PanelHandles, ScrollPosition, ScrollRanges, Synchronizer, Target, WheelDelta, UNSELECTABLE,
};

fn geometry(viewport: f32, thumb: f32, content: f32) -> PanelGeometry {
    PanelGeometry {
        viewport_height: viewport,
        thumb_height: thumb,
        content_scroll_height: content,
    }
}

fn sync_400_50_1200() -> Synchronizer {
    Synchronizer::new(ScrollRanges::measure(&geometry(400.0, 50.0, 1200.0)))
}

fn assert_proportional(sync: &Synchronizer) {
    let ranges = sync.ranges();
    let pos = sync.position();
    let expected = pos.content_offset * ranges.thumb_travel / ranges.content_scroll;
    assert!((pos.thumb_offset - expected).abs() < 1e-4);
}

fn down(y: f32) -> Input {
    Input::PointerDown {
        x: 0.0,
        y,
        button: MouseButton::Left,
    }
}

fn up(y: f32) -> Input {
    Input::PointerUp {
        x: 0.0,
        y,
        button: MouseButton::Left,
    }
}

fn moved(y: f32) -> Input {
    Input::PointerMove { x: 0.0, y }
}

// ============================================================================
// Ranges and scroll_by
// ============================================================================

#[test]
fn test_ranges_from_geometry() {
    let ranges = ScrollRanges::measure(&geometry(400.0, 50.0, 1200.0));
    assert_eq!(ranges.thumb_travel, 350.0);
    assert_eq!(ranges.content_scroll, 800.0);
    assert!(ranges.is_scrollable());
}

#[test]
fn test_scroll_by_maps_thumb_proportionally() {
    let mut sync = sync_400_50_1200();
    let pos = sync.scroll_by(100.0);
    assert_eq!(pos.content_offset, 100.0);
    assert_eq!(pos.thumb_offset, 43.75);
}

#[test]
fn test_scroll_past_bottom_clamps_to_ranges() {
    let mut sync = sync_400_50_1200();
    sync.scroll_by(700.0);
    let pos = sync.scroll_by(500.0);
    assert_eq!(pos.content_offset, 800.0);
    assert_eq!(pos.thumb_offset, 350.0);
}

#[test]
fn test_scroll_past_top_clamps_to_zero() {
    let mut sync = sync_400_50_1200();
    sync.scroll_by(50.0);
    let pos = sync.scroll_by(-5000.0);
    assert_eq!(pos, ScrollPosition::default());
}

#[test]
fn test_zero_delta_is_idempotent() {
    let mut sync = sync_400_50_1200();
    let before = sync.scroll_by(321.0);
    let after = sync.scroll_by(0.0);
    assert_eq!(before, after);
}

#[test]
fn test_offsets_stay_in_range_for_any_delta() {
    let mut sync = sync_400_50_1200();
    for delta in [-1000.0, 13.5, 250.0, 999.0, -0.25, 42.0, -300.0, 1e6, -1e6, 77.7] {
        let pos = sync.scroll_by(delta);
        assert!((0.0..=800.0).contains(&pos.content_offset), "delta {delta}");
        assert!((0.0..=350.0).contains(&pos.thumb_offset), "delta {delta}");
        assert_proportional(&sync);
    }
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_scales_pointer_delta_by_range_ratio() {
    let mut sync = sync_400_50_1200();
    assert!(sync.press(10.0));

    // 35 pointer units * 800 / 350 = 80 content units
    let pos = sync.drag_to(45.0).unwrap();
    assert!((pos.content_offset - 80.0).abs() < 1e-4);
    assert!((pos.thumb_offset - 35.0).abs() < 1e-4);

    // Deltas are relative to the last move, not to the press
    let pos = sync.drag_to(52.0).unwrap();
    assert!((pos.content_offset - 96.0).abs() < 1e-4);
}

#[test]
fn test_drag_remembers_last_pointer_position() {
    let mut sync = sync_400_50_1200();
    sync.press(10.0);
    assert_eq!(sync.drag(), DragState { active: true, last_y: 10.0 });

    sync.drag_to(30.0);
    assert_eq!(sync.drag().last_y, 30.0);
    sync.drag_to(25.0);
    assert_eq!(sync.drag().last_y, 25.0);

    sync.release();
    assert!(!sync.drag().active);
}

#[test]
fn test_move_without_press_does_nothing() {
    let mut sync = sync_400_50_1200();
    assert_eq!(sync.drag_to(200.0), None);
    assert_eq!(sync.position(), ScrollPosition::default());
}

#[test]
fn test_release_ends_drag() {
    let mut sync = sync_400_50_1200();
    sync.press(0.0);
    assert!(sync.release());
    assert!(!sync.release());
    assert_eq!(sync.drag_to(100.0), None);
}

// ============================================================================
// Wheel
// ============================================================================

#[test]
fn test_wheel_delta_is_inverted() {
    let mut sync = sync_400_50_1200();
    let pos = sync.wheel(WheelDelta::Wheel(-120.0), 3.0).unwrap();
    assert_eq!(pos.content_offset, 120.0);

    let pos = sync.wheel(WheelDelta::Wheel(120.0), 3.0).unwrap();
    assert_eq!(pos.content_offset, 0.0);
}

#[test]
fn test_wheel_detail_is_scaled() {
    let mut sync = sync_400_50_1200();
    let pos = sync.wheel(WheelDelta::Detail(3.0), 3.0).unwrap();
    assert_eq!(pos.content_offset, 90.0);
}

#[test]
fn test_wheel_lines_use_step() {
    let mut sync = sync_400_50_1200();
    let pos = sync.wheel(WheelDelta::Lines(2), 4.0).unwrap();
    assert_eq!(pos.content_offset, 8.0);
}

#[test]
fn test_non_finite_wheel_delta_is_ignored() {
    let mut sync = Synchronizer::new(ScrollRanges::new(350.0, 800.0));
    sync.scroll_by(100.0);

    sync.wheel(WheelDelta::Wheel(f32::NAN), 3.0);
    sync.wheel(WheelDelta::Lines(1), f32::INFINITY);
    assert_eq!(sync.position().content_offset, 100.0);

    let pos = sync.scroll_by(50.0);
    assert_eq!(pos.content_offset, 150.0);
    assert_proportional(&sync);
}

#[test]
fn test_non_finite_scroll_delta_is_ignored() {
    let mut sync = sync_400_50_1200();
    let before = sync.scroll_by(42.0);
    assert_eq!(sync.scroll_by(f32::NAN), before);
    assert_eq!(sync.scroll_by(f32::NEG_INFINITY), before);
}

// ============================================================================
// Degenerate geometry
// ============================================================================

#[test]
fn test_short_content_disables_scrolling() {
    let mut sync = Synchronizer::new(ScrollRanges::measure(&geometry(400.0, 50.0, 300.0)));
    assert!(!sync.ranges().is_scrollable());

    assert_eq!(sync.scroll_by(100.0), ScrollPosition::default());
    assert_eq!(sync.wheel(WheelDelta::Wheel(-120.0), 3.0), None);
    assert!(!sync.press(10.0));
    assert_eq!(sync.drag_to(200.0), None);
}

#[test]
fn test_content_equal_to_viewport_disables_scrolling() {
    let mut sync = Synchronizer::new(ScrollRanges::measure(&geometry(400.0, 50.0, 400.0)));
    let pos = sync.scroll_by(10.0);
    assert!(pos.content_offset.is_finite() && pos.thumb_offset.is_finite());
    assert_eq!(pos, ScrollPosition::default());
}

#[test]
fn test_thumb_taller_than_viewport_disables_scrolling() {
    let mut sync = Synchronizer::new(ScrollRanges::measure(&geometry(40.0, 50.0, 1200.0)));
    assert_eq!(sync.ranges().thumb_travel, -10.0);
    assert_eq!(sync.scroll_by(100.0), ScrollPosition::default());
}

// ============================================================================
// Handle: listeners, dispatch, dispose
// ============================================================================

fn mounted(listeners: &mut Listeners) -> scrollpanel::SyncHandle {
    initialize(
        &geometry(400.0, 50.0, 1200.0),
        PanelHandles::new("panel"),
        &PanelConfig::default(),
        listeners,
    )
}

#[test]
fn test_initialize_registers_four_listeners() {
    let mut listeners = Listeners::new();
    let handle = mounted(&mut listeners);
    assert_eq!(listeners.len(), 4);
    assert_eq!(handle.ranges().content_scroll, 800.0);
}

#[test]
fn test_press_on_thumb_locks_selection_until_release() {
    let mut listeners = Listeners::new();
    let mut document = Document::new();
    let mut handle = mounted(&mut listeners);

    handle.dispatch(&listeners, &down(10.0), &[Target::Thumb, Target::Document], &mut document);
    assert!(handle.is_dragging());
    assert!(document.has_class(UNSELECTABLE));

    // Release far away from the thumb still ends the drag
    handle.dispatch(&listeners, &up(300.0), &[Target::Content, Target::Document], &mut document);
    assert!(!handle.is_dragging());
    assert!(document.is_selectable());
}

#[test]
fn test_press_outside_thumb_does_not_drag() {
    let mut listeners = Listeners::new();
    let mut document = Document::new();
    let mut handle = mounted(&mut listeners);

    handle.dispatch(&listeners, &down(10.0), &[Target::Content, Target::Document], &mut document);
    assert!(!handle.is_dragging());
    assert!(document.is_selectable());
}

#[test]
fn test_drag_tracks_pointer_anywhere() {
    let mut listeners = Listeners::new();
    let mut document = Document::new();
    let mut handle = mounted(&mut listeners);

    handle.dispatch(&listeners, &down(0.0), &[Target::Thumb, Target::Document], &mut document);
    // Pointer left the thumb: only the document listener sees the move
    let pos = handle
        .dispatch(&listeners, &moved(35.0), &[Target::Document], &mut document)
        .unwrap();
    assert!((pos.content_offset - 80.0).abs() < 1e-4);
}

#[test]
fn test_wheel_only_over_content() {
    let mut listeners = Listeners::new();
    let mut document = Document::new();
    let mut handle = mounted(&mut listeners);

    let wheel = Input::Wheel {
        x: 0.0,
        y: 0.0,
        delta: WheelDelta::Wheel(-120.0),
    };
    assert_eq!(handle.dispatch(&listeners, &wheel, &[Target::Document], &mut document), None);

    let pos = handle
        .dispatch(&listeners, &wheel, &[Target::Content, Target::Document], &mut document)
        .unwrap();
    assert_eq!(pos.content_offset, 120.0);
}

#[test]
fn test_dispatch_reports_no_change_for_idle_moves() {
    let mut listeners = Listeners::new();
    let mut document = Document::new();
    let mut handle = mounted(&mut listeners);

    assert_eq!(handle.dispatch(&listeners, &moved(90.0), &[Target::Document], &mut document), None);
}

#[test]
fn test_dispose_removes_all_listeners() {
    let mut listeners = Listeners::new();
    let handle = mounted(&mut listeners);
    let other = listeners.add(Target::Document, scrollpanel::Trigger::Wheel);

    assert_eq!(handle.dispose(&mut listeners), 4);
    assert_eq!(listeners.len(), 1);
    assert!(listeners.contains(other));
}

#[test]
fn test_disposed_handle_leaves_nothing_to_match() {
    let mut listeners = Listeners::new();
    let handle = mounted(&mut listeners);
    handle.dispose(&mut listeners);

    let all = [Target::Thumb, Target::Content, Target::Document];
    for input in [down(0.0), up(0.0), moved(0.0)] {
        assert_eq!(listeners.matching(&input, &all).count(), 0);
    }
}
