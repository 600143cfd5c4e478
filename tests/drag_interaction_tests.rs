use approx::assert_abs_diff_eq;
use range_slider_rs::api::{SliderEngine, SliderEngineConfig};
use range_slider_rs::core::{Stop, ValueSource};
use range_slider_rs::interaction::{DragPhase, Handle};

fn build_engine(has_steps: bool) -> SliderEngine {
    let config =
        SliderEngineConfig::new(ValueSource::Interval { min: 0, max: 10 }).with_steps(has_steps);
    let mut engine = SliderEngine::new(config).expect("engine init");
    engine.configure_rail(500.0, 20.0).expect("configure rail");
    engine
}

#[test]
fn drag_with_steps_snaps_to_the_visually_nearest_stop() {
    let mut engine = build_engine(true);

    engine.pointer_down(Handle::Min, 100.0);
    engine.pointer_move(400.0);

    // proposed -10 + 300 = 290, snap(290) = 50 * 6 - 10 = 290,
    // index floor((290 + 10) / (500 / 11)) = 6
    assert_abs_diff_eq!(engine.min_offset().expect("offset"), 290.0, epsilon = 1e-9);
    assert_eq!(engine.selection().min_index, 6);
    assert_eq!(engine.selection().min_value, "6");
    assert_eq!(engine.selection().max_index, 10);
}

#[test]
fn free_form_drag_keeps_unsnapped_offsets() {
    let mut engine = build_engine(false);

    engine.pointer_down(Handle::Min, 100.0);
    engine.pointer_move(383.0);

    assert_abs_diff_eq!(engine.min_offset().expect("offset"), 273.0, epsilon = 1e-9);
    // floor((273 + 10) / (500 / 11)) = floor(6.226) = 6
    assert_eq!(engine.selection().min_index, 6);
}

#[test]
fn min_handle_cannot_pass_the_max_handle() {
    let mut engine = build_engine(false);
    engine.set_selected_indices(0, 5).expect("selection");
    let max_offset = engine.max_offset().expect("offset");

    engine.pointer_down(Handle::Min, 0.0);
    engine.pointer_move(max_offset + 20.0);

    assert_abs_diff_eq!(engine.min_offset().expect("offset"), -10.0, epsilon = 1e-9);
    assert_eq!(engine.selection().min_index, 0);
    assert!(engine.selection().min_index <= engine.selection().max_index);
}

#[test]
fn max_handle_cannot_pass_the_min_handle() {
    let mut engine = build_engine(false);
    engine.set_selected_indices(5, 10).expect("selection");

    engine.pointer_down(Handle::Max, 500.0);
    engine.pointer_move(0.0);

    assert_abs_diff_eq!(engine.max_offset().expect("offset"), 490.0, epsilon = 1e-9);
    assert_eq!(engine.selection().max_index, 10);
}

#[test]
fn free_form_handles_may_coincide() {
    let mut engine = build_engine(false);
    engine.set_selected_indices(0, 5).expect("selection");
    let max_offset = engine.max_offset().expect("offset");

    engine.pointer_down(Handle::Min, 0.0);
    engine.pointer_move(max_offset + 10.0);

    assert_abs_diff_eq!(engine.min_offset().expect("offset"), max_offset, epsilon = 1e-9);
    assert_eq!(engine.selection().min_index, engine.selection().max_index);
    assert!(engine.merged());
}

#[test]
fn step_mode_rejects_snapping_onto_the_other_handle() {
    let mut engine = build_engine(true);
    engine.set_selected_indices(0, 5).expect("selection");

    engine.pointer_down(Handle::Min, 0.0);
    // proposed 240 snaps exactly onto the max handle's stop
    engine.pointer_move(250.0);

    assert_abs_diff_eq!(engine.min_offset().expect("offset"), -10.0, epsilon = 1e-9);
    assert_eq!(engine.selection().min_index, 0);
}

#[test]
fn moves_outside_clamp_limits_are_rejected_entirely() {
    let mut engine = build_engine(true);

    engine.pointer_down(Handle::Max, 0.0);
    engine.pointer_move(100.0);

    assert_abs_diff_eq!(engine.max_offset().expect("offset"), 490.0, epsilon = 1e-9);
    assert_eq!(engine.selection().max_index, 10);
}

#[test]
fn rejected_move_does_not_end_the_drag() {
    let mut engine = build_engine(true);

    engine.pointer_down(Handle::Max, 0.0);
    engine.pointer_move(100.0);
    assert_eq!(engine.drag_phase(), DragPhase::Dragging);

    engine.pointer_move(-100.0);
    assert_abs_diff_eq!(engine.max_offset().expect("offset"), 390.0, epsilon = 1e-9);
}

#[test]
fn pointer_events_are_noops_until_the_rail_is_measured() {
    let config = SliderEngineConfig::new(ValueSource::Interval { min: 0, max: 10 });
    let mut engine = SliderEngine::new(config).expect("engine init");

    engine.pointer_down(Handle::Min, 100.0);
    assert_eq!(engine.drag_phase(), DragPhase::Idle);

    engine.pointer_move(400.0);
    engine.pointer_up();
    assert_eq!(engine.selection().min_index, 0);
    assert_eq!(engine.selection().max_index, 10);
    assert!(engine.min_offset().is_none());
}

#[test]
fn degenerate_domain_disables_dragging() {
    let config = SliderEngineConfig::new(ValueSource::Stops(vec![Stop::from(7.0)]));
    let mut engine = SliderEngine::new(config).expect("engine init");
    engine.configure_rail(500.0, 20.0).expect("configure rail");

    engine.pointer_down(Handle::Min, 100.0);
    assert_eq!(engine.drag_phase(), DragPhase::Idle);
    assert_eq!(engine.selection().min_index, 0);
    assert_eq!(engine.selection().max_index, 0);
    assert!(engine.merged());
}

#[test]
fn second_pointer_down_during_a_drag_is_ignored() {
    let mut engine = build_engine(false);

    engine.pointer_down(Handle::Min, 100.0);
    engine.pointer_down(Handle::Max, 400.0);

    assert_eq!(engine.active_handle(), Some(Handle::Min));
}

#[test]
fn pointer_cancel_reaches_idle() {
    let mut engine = build_engine(false);

    engine.pointer_down(Handle::Min, 100.0);
    engine.pointer_cancel();

    assert_eq!(engine.drag_phase(), DragPhase::Idle);
    assert!(engine.active_handle().is_none());
}

#[test]
fn resize_mid_drag_keeps_the_selection_ordered() {
    let mut engine = build_engine(false);

    engine.pointer_down(Handle::Min, 0.0);
    engine.configure_rail(1000.0, 20.0).expect("resize");
    engine.pointer_move(50.0);
    engine.pointer_up();

    assert!(engine.selection().min_index <= engine.selection().max_index);
    assert_eq!(engine.selection().max_index, 10);
}

#[test]
fn resize_recomputes_offsets_from_indices() {
    let mut engine = build_engine(true);
    engine.set_selected_indices(2, 8).expect("selection");

    engine.configure_rail(1000.0, 20.0).expect("resize");

    // segment width 100: 100 * 2 - 10 and 100 * 8 - 10
    assert_abs_diff_eq!(engine.min_offset().expect("offset"), 190.0, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.max_offset().expect("offset"), 790.0, epsilon = 1e-9);
    assert_eq!(engine.selection().min_index, 2);
    assert_eq!(engine.selection().max_index, 8);
}
