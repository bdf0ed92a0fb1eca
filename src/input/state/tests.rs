use super::*;
use crate::draw::color::{BACKGROUND, BLUE, GRID, RED};
use crate::draw::{Scene, Shape};
use crate::input::{Key, Tool};
use crate::util::{Bounds, Point};

fn create_test_input_state() -> InputState {
    let mut scene = Scene::new(800, 600, BACKGROUND);
    scene.replace_grid(vec![Shape::Line {
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: 600.0,
        stroke: GRID,
        stroke_width: 0.5,
    }]);
    InputState::new(scene, GestureSettings::default())
}

fn drag(state: &mut InputState, from: (f64, f64), to: (f64, f64)) {
    state.on_pointer_down(from.0, from.1);
    state.on_pointer_move(to.0, to.1);
    state.on_pointer_up(to.0, to.1);
}

fn last_shape(state: &InputState) -> &Shape {
    &state.scene.objects().last().unwrap().shape
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_tool_flags_follow_active_tool() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Rectangle);
    drag(&mut state, (10.0, 10.0), (50.0, 50.0));

    for tool in Tool::ALL {
        state.set_tool(tool);
        let expected = match tool {
            Tool::Select => (true, true),
            Tool::Draw | Tool::Eraser => (false, false),
            _ => (false, true),
        };
        for object in state.scene.drawings() {
            assert_eq!((object.selectable, object.evented), expected, "{tool}");
        }
        assert_eq!(state.scene.selection_enabled(), tool == Tool::Select);
        assert_eq!(state.scene.is_drawing_mode(), tool.uses_brush());

        let grid = &state.scene.objects()[0];
        assert!(grid.is_grid());
        assert!(!grid.selectable && !grid.evented);
    }
}

#[test]
fn test_brush_tracks_tool_and_color() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Draw);
    state.set_color(RED);
    let brush = state.scene.brush().unwrap();
    assert_eq!(brush.color, RED);
    assert_eq!(brush.width, 2.0);

    state.set_tool(Tool::Eraser);
    let brush = state.scene.brush().unwrap();
    assert_eq!(brush.color, BACKGROUND);
    assert_eq!(brush.width, 20.0);

    // Color persists across tool switches
    state.set_tool(Tool::Line);
    assert_eq!(state.active_color(), RED);
}

#[test]
fn test_tool_change_discards_active_object() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Rectangle);
    drag(&mut state, (10.0, 10.0), (50.0, 50.0));
    state.set_tool(Tool::Select);
    state.on_pointer_down(20.0, 20.0);
    state.on_pointer_up(20.0, 20.0);
    assert!(state.scene.active_object().is_some());

    state.set_tool(Tool::Circle);
    assert_eq!(state.scene.active_object(), None);
}

#[test]
fn test_rectangle_is_normalized_for_every_drag_direction() {
    let corners = [(100.0, 100.0), (250.0, 100.0), (100.0, 180.0), (250.0, 180.0)];
    for start in corners {
        let end = (350.0 - start.0, 280.0 - start.1);
        let mut state = create_test_input_state();
        state.set_tool(Tool::Rectangle);
        drag(&mut state, start, end);

        let Shape::Rect {
            left,
            top,
            width,
            height,
            ..
        } = *last_shape(&state)
        else {
            panic!("expected a rectangle");
        };
        assert_eq!(
            Bounds::new(left, top, width, height),
            Bounds::new(100.0, 100.0, 150.0, 80.0),
            "drag from {start:?}"
        );
    }
}

#[test]
fn test_circle_radius_is_half_the_drag() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Circle);
    drag(&mut state, (100.0, 100.0), (130.0, 140.0));

    let Shape::Circle {
        left, top, radius, ..
    } = *last_shape(&state)
    else {
        panic!("expected a circle");
    };
    assert_eq!((left, top), (100.0, 100.0));
    assert_close(radius, 25.0);
}

#[test]
fn test_arrow_adds_two_head_segments() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Arrow);
    let before = state.scene.len();
    drag(&mut state, (100.0, 100.0), (200.0, 150.0));
    assert_eq!(state.scene.len(), before + 3);

    let shaft_angle = 50.0_f64.atan2(100.0);
    let mut head_angles = Vec::new();
    for object in &state.scene.objects()[before + 1..] {
        let Shape::Line { x1, y1, x2, y2, .. } = object.shape else {
            panic!("expected a line");
        };
        assert_eq!((x1, y1), (200.0, 150.0));
        assert_close((x2 - x1).hypot(y2 - y1), 15.0);
        head_angles.push((y1 - y2).atan2(x1 - x2));
    }
    let thirty = 30.0_f64.to_radians();
    assert_close(head_angles[0], shaft_angle - thirty);
    assert_close(head_angles[1], shaft_angle + thirty);
}

#[test]
fn test_line_follows_pointer_and_state_resets() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Line);
    state.on_pointer_down(10.0, 20.0);
    assert_eq!(state.start_point(), Some(Point::new(10.0, 20.0)));
    assert!(state.provisional().is_some());

    state.on_pointer_move(40.0, 60.0);
    state.on_pointer_up(99.0, 99.0);
    assert_eq!(state.start_point(), None);
    assert_eq!(state.provisional(), None);
    assert!(matches!(state.drawing_state(), DrawingState::Idle));

    let Shape::Line { x2, y2, .. } = *last_shape(&state) else {
        panic!("expected a line");
    };
    assert_eq!((x2, y2), (40.0, 60.0));
}

#[test]
fn test_click_without_drag_commits_degenerate_shape() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Rectangle);
    let before = state.scene.len();
    state.on_pointer_down(30.0, 30.0);
    state.on_pointer_up(30.0, 30.0);
    assert_eq!(state.scene.len(), before + 1);
}

#[test]
fn test_move_and_up_without_gesture_are_ignored() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Rectangle);
    let before = state.scene.len();
    state.on_pointer_move(10.0, 10.0);
    state.on_pointer_up(10.0, 10.0);
    assert_eq!(state.scene.len(), before);
}

#[test]
fn test_tool_switch_mid_arrow_commits_with_head() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Arrow);
    let before = state.scene.len();
    state.on_pointer_down(0.0, 0.0);
    state.on_pointer_move(100.0, 0.0);
    state.set_tool(Tool::Select);

    assert_eq!(state.scene.len(), before + 3);
    assert!(matches!(state.drawing_state(), DrawingState::Idle));
    // The stray pointer-up no longer touches anything
    state.on_pointer_up(100.0, 0.0);
    assert_eq!(state.scene.len(), before + 3);
}

#[test]
fn test_tool_switch_mid_gesture_can_discard() {
    let mut state = create_test_input_state();
    state.settings.tool_switch_policy = ToolSwitchPolicy::Discard;
    state.set_tool(Tool::Rectangle);
    let before = state.scene.len();
    state.on_pointer_down(0.0, 0.0);
    state.on_pointer_move(40.0, 40.0);
    state.set_tool(Tool::Line);

    assert_eq!(state.scene.len(), before);
    assert_eq!(state.provisional(), None);
}

#[test]
fn test_freehand_stroke_commits_path() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Draw);
    state.set_color(BLUE);
    state.on_pointer_down(0.0, 0.0);
    state.on_pointer_move(5.0, 5.0);
    state.on_pointer_move(10.0, 0.0);
    state.on_pointer_up(10.0, 0.0);

    let Shape::Path {
        points,
        stroke,
        stroke_width,
    } = last_shape(&state)
    else {
        panic!("expected a path");
    };
    assert_eq!(points.len(), 3);
    assert_eq!(*stroke, BLUE);
    assert_eq!(*stroke_width, 2.0);
}

#[test]
fn test_color_change_keeps_stroke_in_progress() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Draw);
    state.on_pointer_down(0.0, 0.0);
    state.set_color(RED);
    state.on_pointer_move(5.0, 5.0);
    state.on_pointer_up(5.0, 5.0);
    let Shape::Path { points, stroke, .. } = last_shape(&state) else {
        panic!("expected a path");
    };
    assert_eq!(points.len(), 2);
    // The stroke in flight takes the new paint
    assert_eq!(*stroke, RED);
}

#[test]
fn test_select_drag_moves_hit_object() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Rectangle);
    drag(&mut state, (100.0, 100.0), (150.0, 150.0));
    state.set_tool(Tool::Select);

    drag(&mut state, (120.0, 120.0), (140.0, 110.0));
    let Shape::Rect { left, top, .. } = *last_shape(&state) else {
        panic!("expected a rectangle");
    };
    assert_eq!((left, top), (120.0, 90.0));

    // Clicking empty canvas drops the selection
    state.on_pointer_down(700.0, 500.0);
    state.on_pointer_up(700.0, 500.0);
    assert_eq!(state.scene.active_object(), None);
}

#[test]
fn test_text_tool_places_placeholder_in_edit_mode() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Text);
    state.on_pointer_down(40.0, 50.0);

    let edit = state.text_edit().unwrap();
    assert_eq!(state.scene.active_object(), Some(edit.id));
    assert!(matches!(state.drawing_state(), DrawingState::Idle));
    let Shape::Text {
        text,
        font_size,
        font,
        ..
    } = last_shape(&state)
    else {
        panic!("expected text");
    };
    assert_eq!(text, "Double click to edit");
    assert_eq!(*font_size, 20.0);
    assert_eq!(font.family, "Arial");
}

#[test]
fn test_typing_replaces_placeholder_then_appends() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Text);
    state.on_pointer_down(40.0, 50.0);

    // Hotkey letters are plain text while editing
    for c in "API".chars() {
        assert!(state.on_key_press(Key::Char(c)));
    }
    state.on_key_press(Key::Return);
    state.on_key_press(Key::Char('x'));
    state.on_key_press(Key::Backspace);
    assert_eq!(state.active_tool(), Tool::Text);

    let Shape::Text { text, .. } = last_shape(&state) else {
        panic!("expected text");
    };
    assert_eq!(text, "API\n");

    state.on_key_press(Key::Escape);
    assert!(!state.is_editing_text());
}

#[test]
fn test_pointer_down_ends_editing() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Text);
    state.on_pointer_down(40.0, 50.0);
    let first = state.text_edit().unwrap().id;
    state.on_pointer_down(200.0, 200.0);
    assert_ne!(state.text_edit().map(|edit| edit.id), Some(first));
}

#[test]
fn test_hotkeys_switch_tools_outside_editing() {
    let mut state = create_test_input_state();
    assert!(state.on_key_press(Key::Char('r')));
    assert_eq!(state.active_tool(), Tool::Rectangle);
    assert!(state.on_key_press(Key::Char('E')));
    assert_eq!(state.active_tool(), Tool::Eraser);
    assert!(!state.on_key_press(Key::Char('z')));
}

#[test]
fn test_delete_removes_active_object() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Rectangle);
    drag(&mut state, (10.0, 10.0), (50.0, 50.0));
    state.set_tool(Tool::Select);
    state.on_pointer_down(20.0, 20.0);
    state.on_pointer_up(20.0, 20.0);

    let before = state.scene.len();
    assert!(state.on_key_press(Key::Delete));
    assert_eq!(state.scene.len(), before - 1);
    assert!(!state.on_key_press(Key::Delete));
}

#[test]
fn test_abort_gesture_removes_provisional_shape() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Circle);
    let before = state.scene.len();
    state.on_pointer_down(10.0, 10.0);
    state.abort_gesture();
    assert_eq!(state.scene.len(), before);
    assert_eq!(state.start_point(), None);
}

#[test]
fn test_every_pointer_step_requests_a_render() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Line);
    let before = state.scene.render_requests();

    drag(&mut state, (10.0, 10.0), (40.0, 10.0));
    assert_eq!(state.scene.render_requests(), before + 3);

    // Nothing in flight, nothing to repaint
    state.on_pointer_move(50.0, 50.0);
    assert_eq!(state.scene.render_requests(), before + 3);
}
