use super::*;
use crate::draw::{BLACK, RED, WHITE};
use crate::input::{PointerEvent, Tool};

fn create_test_input_state() -> InputState {
    // Seeded so stylized-brush tests are reproducible.
    InputState::with_seed(100, 100, 7).unwrap()
}

fn pixel(state: &InputState, x: u32, y: u32) -> [u8; 4] {
    state.pixels().get_pixel(x, y).0
}

fn surface_is_all_white(state: &InputState) -> bool {
    state.pixels().pixels().all(|px| *px == WHITE.to_rgba8())
}

fn drag(state: &mut InputState, from: (f64, f64), to: (f64, f64)) {
    state.handle_pointer_event(PointerEvent::Down {
        x: from.0,
        y: from.1,
    });
    state.handle_pointer_event(PointerEvent::Move { x: to.0, y: to.1 });
    state.handle_pointer_event(PointerEvent::Up { x: to.0, y: to.1 });
}

#[test]
fn red_rectangle_scenario_commits_undoes_and_redoes_exactly() {
    let mut state = create_test_input_state();
    state.current_tool = Tool::Rectangle;
    state.current_color = RED;
    state.current_width = 2.0;

    drag(&mut state, (10.0, 10.0), (50.0, 50.0));

    // One red outline with corners (10,10)-(50,50) on white.
    assert_eq!(pixel(&state, 10, 30), RED.to_rgba8().0); // left edge
    assert_eq!(pixel(&state, 30, 10), RED.to_rgba8().0); // top edge
    assert_eq!(pixel(&state, 50, 30), RED.to_rgba8().0); // right edge
    assert_eq!(pixel(&state, 30, 50), RED.to_rgba8().0); // bottom edge
    assert_eq!(pixel(&state, 30, 30), WHITE.to_rgba8().0); // interior
    assert_eq!(pixel(&state, 5, 5), WHITE.to_rgba8().0); // exterior

    assert!(state.can_undo());
    assert!(!state.can_redo());

    let committed = state.surface().snapshot();

    state.undo();
    assert!(surface_is_all_white(&state));
    assert!(!state.can_undo());
    assert!(state.can_redo());

    state.redo();
    assert_eq!(state.surface().snapshot(), committed);
    assert!(!state.can_redo());
}

#[test]
fn shape_preview_does_not_accumulate_ghost_outlines() {
    let mut incremental = create_test_input_state();
    incremental.current_tool = Tool::Circle;
    incremental.handle_pointer_event(PointerEvent::Down { x: 50.0, y: 50.0 });
    for radius in [10.0, 20.0, 30.0] {
        incremental.handle_pointer_event(PointerEvent::Move {
            x: 50.0 + radius,
            y: 50.0,
        });
    }
    incremental.handle_pointer_event(PointerEvent::Up { x: 80.0, y: 50.0 });

    let mut direct = create_test_input_state();
    direct.current_tool = Tool::Circle;
    drag(&mut direct, (50.0, 50.0), (80.0, 50.0));

    // N preview frames at different radii leave exactly the final outline.
    assert_eq!(
        incremental.surface().snapshot(),
        direct.surface().snapshot()
    );
    // The intermediate radius-10 ring is gone.
    assert_eq!(pixel(&incremental, 60, 50), WHITE.to_rgba8().0);
}

#[test]
fn n_undos_return_to_initial_white_and_redo_inverts_each_undo() {
    let mut state = create_test_input_state();
    let strokes = [
        ((10.0, 10.0), (60.0, 10.0)),
        ((10.0, 30.0), (60.0, 30.0)),
        ((10.0, 50.0), (60.0, 50.0)),
        ((10.0, 70.0), (60.0, 70.0)),
    ];

    let mut committed = Vec::new();
    for (from, to) in strokes {
        drag(&mut state, from, to);
        committed.push(state.surface().snapshot());
    }
    assert_eq!(state.history_len(), strokes.len() + 1);

    // Interleave: each undo is exactly inverted by a redo.
    for snapshot in committed.iter().rev() {
        state.undo();
        state.redo();
        assert_eq!(&state.surface().snapshot(), snapshot);
        state.undo();
    }

    assert!(surface_is_all_white(&state));
    assert!(!state.can_undo());
}

#[test]
fn commit_after_undo_destroys_the_redo_branch() {
    let mut state = create_test_input_state();
    drag(&mut state, (10.0, 10.0), (50.0, 10.0));
    drag(&mut state, (10.0, 30.0), (50.0, 30.0));

    state.undo();
    assert!(state.can_redo());

    drag(&mut state, (10.0, 60.0), (50.0, 60.0));
    assert!(!state.can_redo());

    // Redo is now a no-op.
    let before = state.surface().snapshot();
    state.redo();
    assert_eq!(state.surface().snapshot(), before);
}

#[test]
fn erasing_the_same_region_twice_is_idempotent() {
    let mut state = create_test_input_state();
    state.current_width = 20.0;
    drag(&mut state, (20.0, 50.0), (80.0, 50.0));

    state.current_tool = Tool::Eraser;
    let pass = [(30.0, 50.0), (50.0, 50.0), (70.0, 50.0)];

    state.handle_pointer_event(PointerEvent::Down { x: pass[0].0, y: pass[0].1 });
    for &(x, y) in &pass {
        state.handle_pointer_event(PointerEvent::Move { x, y });
    }
    state.handle_pointer_event(PointerEvent::Up { x: 70.0, y: 50.0 });
    let after_first = state.surface().snapshot();
    assert_eq!(pixel(&state, 50, 50)[3], 0);

    state.handle_pointer_event(PointerEvent::Down { x: pass[0].0, y: pass[0].1 });
    for &(x, y) in &pass {
        state.handle_pointer_event(PointerEvent::Move { x, y });
    }
    state.handle_pointer_event(PointerEvent::Up { x: 70.0, y: 50.0 });

    assert_eq!(state.surface().snapshot(), after_first);
}

#[test]
fn pointer_leave_continues_the_gesture_at_the_last_position() {
    let mut state = create_test_input_state();
    state.handle_pointer_event(PointerEvent::Down { x: 10.0, y: 50.0 });
    state.handle_pointer_event(PointerEvent::Move { x: 40.0, y: 50.0 });
    state.handle_pointer_event(PointerEvent::Leave);

    // Still drawing: no commit happened.
    assert!(state.gesture_active());
    assert_eq!(state.history_len(), 1);

    state.handle_pointer_event(PointerEvent::Up { x: 40.0, y: 50.0 });
    assert!(!state.gesture_active());
    assert_eq!(state.history_len(), 2);
}

#[test]
fn pointer_enter_resets_the_segment_start_without_a_joining_stroke() {
    let mut state = create_test_input_state();
    state.handle_pointer_event(PointerEvent::Down { x: 10.0, y: 10.0 });
    state.handle_pointer_event(PointerEvent::Move { x: 20.0, y: 10.0 });
    state.handle_pointer_event(PointerEvent::Leave);
    state.handle_pointer_event(PointerEvent::Enter { x: 80.0, y: 80.0 });
    state.handle_pointer_event(PointerEvent::Move { x: 90.0, y: 80.0 });
    state.handle_pointer_event(PointerEvent::Up { x: 90.0, y: 80.0 });

    // Both segments painted...
    assert_eq!(pixel(&state, 15, 10), BLACK.to_rgba8().0);
    assert_eq!(pixel(&state, 85, 80), BLACK.to_rgba8().0);
    // ...but nothing along the line that would join exit to re-entry.
    assert_eq!(pixel(&state, 50, 45), WHITE.to_rgba8().0);
}

#[test]
fn tool_parameter_changes_apply_from_the_next_segment() {
    let mut state = create_test_input_state();
    state.handle_pointer_event(PointerEvent::Down { x: 10.0, y: 50.0 });
    state.handle_pointer_event(PointerEvent::Move { x: 30.0, y: 50.0 });

    // The collaborator flips the color mid-gesture.
    state.current_color = RED;
    state.handle_pointer_event(PointerEvent::Move { x: 60.0, y: 50.0 });
    state.handle_pointer_event(PointerEvent::Up { x: 60.0, y: 50.0 });

    assert_eq!(pixel(&state, 20, 50), BLACK.to_rgba8().0);
    assert_eq!(pixel(&state, 50, 50), RED.to_rgba8().0);
}

#[test]
fn move_while_idle_draws_nothing_and_stays_idle() {
    let mut state = create_test_input_state();
    state.handle_pointer_event(PointerEvent::Move { x: 50.0, y: 50.0 });

    assert!(matches!(state.state, GestureState::Idle));
    assert!(surface_is_all_white(&state));
    assert!(state.take_damage().is_empty());
}

#[test]
fn undo_and_redo_are_ignored_mid_gesture() {
    let mut state = create_test_input_state();
    drag(&mut state, (10.0, 10.0), (50.0, 10.0));

    state.handle_pointer_event(PointerEvent::Down { x: 10.0, y: 40.0 });
    state.handle_pointer_event(PointerEvent::Move { x: 50.0, y: 40.0 });

    state.undo();
    assert!(state.gesture_active());
    // The first stroke is still there: the cursor did not move.
    assert_eq!(pixel(&state, 30, 10), BLACK.to_rgba8().0);

    state.handle_pointer_event(PointerEvent::Up { x: 50.0, y: 40.0 });
    assert_eq!(state.history_len(), 3);
}

#[test]
fn an_empty_click_still_commits_one_history_entry() {
    let mut state = create_test_input_state();
    state.handle_pointer_event(PointerEvent::Down { x: 50.0, y: 50.0 });
    state.handle_pointer_event(PointerEvent::Up { x: 50.0, y: 50.0 });

    assert_eq!(state.history_len(), 2);
    assert!(state.can_undo());
    assert!(surface_is_all_white(&state));
}

#[test]
fn damage_tracks_strokes_and_widens_to_full_on_undo() {
    let mut state = create_test_input_state();
    assert!(state.take_damage().is_empty());

    drag(&mut state, (10.0, 10.0), (40.0, 10.0));
    let stroke_damage = state.take_damage();
    assert!(!stroke_damage.is_empty());
    assert!(stroke_damage.iter().all(|r| r.width < 100 || r.height < 100));

    state.undo();
    let undo_damage = state.take_damage();
    assert_eq!(undo_damage.len(), 1);
    assert_eq!(undo_damage[0].width, 100);
    assert_eq!(undo_damage[0].height, 100);
}

#[test]
fn stylized_brushes_paint_and_commit_like_any_gesture() {
    let mut state = create_test_input_state();
    state.brush_style = crate::brush::BrushStyle::Crayon;
    state.current_width = 8.0;
    state.handle_pointer_event(PointerEvent::Down { x: 10.0, y: 50.0 });
    for i in 1..=6 {
        state.handle_pointer_event(PointerEvent::Move {
            x: 10.0 + i as f64 * 10.0,
            y: 50.0,
        });
    }
    state.handle_pointer_event(PointerEvent::Up { x: 70.0, y: 50.0 });
    assert!(!surface_is_all_white(&state));
    assert_eq!(state.history_len(), 2);

    state.brush_style = crate::brush::BrushStyle::Ink;
    state.handle_pointer_event(PointerEvent::Down { x: 10.0, y: 80.0 });
    for i in 1..=6 {
        state.handle_pointer_event(PointerEvent::Move {
            x: 10.0 + i as f64 * 10.0,
            y: 80.0 + (i % 2) as f64 * 6.0,
        });
    }
    state.handle_pointer_event(PointerEvent::Up { x: 70.0, y: 86.0 });
    assert_eq!(state.history_len(), 3);

    // Undoing both stylized strokes still returns to blank.
    state.undo();
    state.undo();
    assert!(surface_is_all_white(&state));
}
