use crossterm::event::{KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind};
use scrollpanel::event::DETAIL_SCALE;
use scrollpanel::layout::layout;
use scrollpanel::text::wrap_lines;
use scrollpanel::{
    hit_path, Document, Element, Input, Listeners, MouseButton, Overflow, PanelHandles, Position,
    Rect, Size, Target, Trigger, WheelDelta, UNSELECTABLE,
};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

// ============================================================================
// Crossterm adaptation
// ============================================================================

#[test]
fn test_left_press_and_release() {
    let down = Input::from_crossterm(&mouse(MouseEventKind::Down(CtButton::Left), 3, 7));
    assert_eq!(
        down,
        Some(Input::PointerDown {
            x: 3.0,
            y: 7.0,
            button: MouseButton::Left
        })
    );

    let up = Input::from_crossterm(&mouse(MouseEventKind::Up(CtButton::Left), 4, 9));
    assert_eq!(
        up,
        Some(Input::PointerUp {
            x: 4.0,
            y: 9.0,
            button: MouseButton::Left
        })
    );
}

#[test]
fn test_other_presses_are_ignored() {
    assert_eq!(Input::from_crossterm(&mouse(MouseEventKind::Down(CtButton::Right), 0, 0)), None);
    assert_eq!(Input::from_crossterm(&mouse(MouseEventKind::Down(CtButton::Middle), 0, 0)), None);
}

#[test]
fn test_drag_and_motion_are_moves() {
    let expected = Some(Input::PointerMove { x: 1.0, y: 2.0 });
    assert_eq!(Input::from_crossterm(&mouse(MouseEventKind::Drag(CtButton::Left), 1, 2)), expected);
    assert_eq!(Input::from_crossterm(&mouse(MouseEventKind::Moved, 1, 2)), expected);
}

#[test]
fn test_vertical_scroll_is_one_line() {
    let down = Input::from_crossterm(&mouse(MouseEventKind::ScrollDown, 5, 5)).unwrap();
    let Input::Wheel { delta, .. } = down else {
        panic!("expected wheel, got {down:?}");
    };
    assert_eq!(delta, WheelDelta::Lines(1));

    let up = Input::from_crossterm(&mouse(MouseEventKind::ScrollUp, 5, 5)).unwrap();
    assert_eq!(up.position(), (5.0, 5.0));
    assert!(matches!(up, Input::Wheel { delta: WheelDelta::Lines(-1), .. }));
}

#[test]
fn test_horizontal_scroll_is_ignored() {
    assert_eq!(Input::from_crossterm(&mouse(MouseEventKind::ScrollLeft, 0, 0)), None);
    assert_eq!(Input::from_crossterm(&mouse(MouseEventKind::ScrollRight, 0, 0)), None);
}

#[test]
fn test_wheel_delta_normalization() {
    assert_eq!(WheelDelta::Wheel(-120.0).to_content_delta(3.0), 120.0);
    assert_eq!(WheelDelta::Wheel(40.0).to_content_delta(3.0), -40.0);
    assert_eq!(WheelDelta::Detail(-2.0).to_content_delta(3.0), -2.0 * DETAIL_SCALE);
    assert_eq!(WheelDelta::Lines(-3).to_content_delta(2.5), -7.5);
}

// ============================================================================
// Listener registry
// ============================================================================

#[test]
fn test_trigger_of_input() {
    let down = Input::PointerDown {
        x: 0.0,
        y: 0.0,
        button: MouseButton::Left,
    };
    assert_eq!(Trigger::of(&down), Trigger::PointerDown);
    assert_eq!(Trigger::of(&Input::PointerMove { x: 0.0, y: 0.0 }), Trigger::PointerMove);
}

#[test]
fn test_listeners_match_trigger_and_target() {
    let mut listeners = Listeners::new();
    let on_thumb = listeners.add(Target::Thumb, Trigger::PointerDown);
    let on_doc = listeners.add(Target::Document, Trigger::PointerDown);
    let _wheel = listeners.add(Target::Content, Trigger::Wheel);

    let press = Input::PointerDown {
        x: 0.0,
        y: 0.0,
        button: MouseButton::Left,
    };

    let hit: Vec<_> = listeners.matching(&press, &[Target::Thumb]).collect();
    assert_eq!(hit, vec![on_thumb, on_doc]);

    // The document sees everything of its trigger, even off-path
    let missed: Vec<_> = listeners.matching(&press, &[Target::Content]).collect();
    assert_eq!(missed, vec![on_doc]);
}

#[test]
fn test_removed_listener_no_longer_matches() {
    let mut listeners = Listeners::new();
    let id = listeners.add(Target::Document, Trigger::PointerUp);
    assert!(listeners.remove(id));
    assert!(!listeners.remove(id));
    assert!(listeners.is_empty());

    let up = Input::PointerUp {
        x: 0.0,
        y: 0.0,
        button: MouseButton::Left,
    };
    assert_eq!(listeners.matching(&up, &[Target::Document]).count(), 0);
}

#[test]
fn test_listener_ids_are_unique() {
    let mut listeners = Listeners::new();
    let a = listeners.add(Target::Thumb, Trigger::PointerDown);
    listeners.remove(a);
    let b = listeners.add(Target::Thumb, Trigger::PointerDown);
    assert_ne!(a, b);
}

// ============================================================================
// Document
// ============================================================================

#[test]
fn test_document_class_toggle() {
    let mut document = Document::new();
    assert!(document.is_selectable());
    assert!(document.add_class(UNSELECTABLE));
    assert!(!document.add_class(UNSELECTABLE));
    assert!(!document.is_selectable());
    assert_eq!(document.classes().collect::<Vec<_>>(), vec![UNSELECTABLE]);

    assert!(document.remove_class(UNSELECTABLE));
    assert!(!document.remove_class(UNSELECTABLE));
    assert!(document.is_selectable());
}

#[test]
fn test_other_classes_survive() {
    let mut document = Document::new();
    document.add_class("dark");
    document.add_class(UNSELECTABLE);
    document.remove_class(UNSELECTABLE);
    assert!(document.has_class("dark"));
}

// ============================================================================
// Hit testing
// ============================================================================

fn scrolled_list(offset: u16) -> Element {
    Element::row()
        .id("root")
        .child(
            Element::col()
                .id("list")
                .width(Size::Fixed(8))
                .height(Size::Fixed(3))
                .overflow(Overflow::Hidden)
                .scroll_offset(offset)
                .children((0..10).map(|i| Element::text(format!("item {i}")).id(format!("item-{i}")))),
        )
        .child(
            Element::box_()
                .id("bar")
                .position(Position::Relative)
                .width(Size::Fixed(1))
                .height(Size::Fill)
                .child(
                    Element::box_()
                        .id("knob")
                        .position(Position::Absolute)
                        .top(1)
                        .width(Size::Fill)
                        .height(Size::Fixed(1)),
                ),
        )
}

#[test]
fn test_hit_path_is_deepest_first() {
    let root = scrolled_list(0);
    let layout = layout(&root, Rect::new(0, 0, 20, 10));
    assert_eq!(hit_path(&layout, &root, 2, 1), vec!["item-1", "list", "root"]);
}

#[test]
fn test_hit_path_follows_scroll_offset() {
    let root = scrolled_list(5);
    let layout = layout(&root, Rect::new(0, 0, 20, 10));
    assert_eq!(hit_path(&layout, &root, 2, 0), vec!["item-5", "list", "root"]);
    assert_eq!(hit_path(&layout, &root, 2, 2), vec!["item-7", "list", "root"]);
}

#[test]
fn test_hit_path_outside_everything() {
    let root = scrolled_list(0);
    let layout = layout(&root, Rect::new(0, 0, 20, 10));
    assert!(hit_path(&layout, &root, 15, 1).is_empty());
    // Below the clipped list, rows of hidden items are not hittable
    assert!(hit_path(&layout, &root, 2, 4).is_empty());
}

#[test]
fn test_absolute_child_is_on_top() {
    let root = scrolled_list(0);
    let layout = layout(&root, Rect::new(0, 0, 20, 10));
    assert_eq!(hit_path(&layout, &root, 8, 1), vec!["knob", "bar", "root"]);
    assert_eq!(hit_path(&layout, &root, 8, 2), vec!["bar", "root"]);
}

#[test]
fn test_handles_map_path_to_targets() {
    let handles = PanelHandles::new("p");
    let path = |ids: &[&str]| ids.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(
        handles.targets(&path(&["p-thumb", "p-track", "p"])),
        vec![Target::Thumb, Target::Document]
    );
    assert_eq!(
        handles.targets(&path(&["line", "p-content", "p"])),
        vec![Target::Content, Target::Document]
    );
    assert_eq!(handles.targets(&[]), vec![Target::Document]);
}

// ============================================================================
// Text wrapping
// ============================================================================

#[test]
fn test_wrap_breaks_at_width() {
    assert_eq!(wrap_lines("abcdefg", 3), vec!["abc", "def", "g"]);
}

#[test]
fn test_wrap_keeps_explicit_newlines() {
    assert_eq!(wrap_lines("ab\n\ncd", 10), vec!["ab", "", "cd"]);
}

#[test]
fn test_wrap_moves_wide_glyph_to_next_line() {
    assert_eq!(wrap_lines("ab日", 3), vec!["ab", "日"]);
}

#[test]
fn test_wrap_edge_widths() {
    assert!(wrap_lines("abc", 0).is_empty());
    assert_eq!(wrap_lines("", 5), vec![""]);
}
