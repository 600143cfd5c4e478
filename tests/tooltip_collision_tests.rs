use approx::assert_abs_diff_eq;
use range_slider_rs::api::{SliderEngine, SliderEngineConfig};
use range_slider_rs::core::{ValueSource, evaluate_merge, merged_tooltip_layout, tooltips_collide};
use range_slider_rs::interaction::Handle;

fn build_engine() -> SliderEngine {
    let config = SliderEngineConfig::new(ValueSource::Interval { min: 0, max: 10 });
    let mut engine = SliderEngine::new(config).expect("engine init");
    engine.configure_rail(500.0, 20.0).expect("configure rail");
    engine
}

#[test]
fn separated_tooltips_do_not_collide() {
    assert!(!tooltips_collide(100.0, 40.0, 300.0, 40.0));
}

#[test]
fn overlapping_tooltips_collide() {
    assert!(tooltips_collide(100.0, 40.0, 130.0, 40.0));
    // edges touching counts as a collision
    assert!(tooltips_collide(100.0, 40.0, 140.0, 40.0));
}

#[test]
fn equal_indices_merge_regardless_of_geometry() {
    assert!(evaluate_merge(4, 4, 0.0, 500.0, None));
}

#[test]
fn distinct_indices_without_metrics_never_merge_geometrically() {
    assert!(!evaluate_merge(3, 4, 100.0, 110.0, None));
}

#[test]
fn engine_merges_when_measured_tooltips_overlap() {
    let mut engine = build_engine();
    engine.set_tooltip_metrics(80.0, 80.0, 120.0);
    engine.set_selected_indices(5, 6).expect("selection");

    // handle centers 250 and 300, half-widths 40 + 40 >= 50 apart
    assert!(engine.merged());
}

#[test]
fn engine_does_not_merge_narrow_tooltips() {
    let mut engine = build_engine();
    engine.set_tooltip_metrics(30.0, 30.0, 80.0);
    engine.set_selected_indices(5, 6).expect("selection");

    assert!(!engine.merged());
}

#[test]
fn coinciding_handles_merge_without_metrics() {
    let mut engine = build_engine();
    engine.set_selected_indices(6, 6).expect("selection");

    assert!(engine.merged());
}

#[test]
fn merged_layout_centers_on_the_track_midpoint() {
    let layout = merged_tooltip_layout(100.0, 200.0, 80.0, 500.0);

    assert_abs_diff_eq!(layout.left, 160.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.caret_offset, 40.0, epsilon = 1e-9);
}

#[test]
fn merged_layout_clamps_at_the_left_container_edge() {
    let layout = merged_tooltip_layout(0.0, 20.0, 120.0, 500.0);

    assert_abs_diff_eq!(layout.left, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.caret_offset, 10.0, epsilon = 1e-9);
}

#[test]
fn merged_layout_clamps_at_the_right_container_edge() {
    let layout = merged_tooltip_layout(440.0, 40.0, 120.0, 500.0);

    assert_abs_diff_eq!(layout.left, 380.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.caret_offset, 80.0, epsilon = 1e-9);
}

#[test]
fn engine_merged_layout_uses_track_and_metrics() {
    let mut engine = build_engine();
    assert!(engine.merged_tooltip_layout().is_none());

    engine.set_tooltip_metrics(40.0, 40.0, 100.0);
    engine.set_selected_indices(0, 10).expect("selection");

    let layout = engine.merged_tooltip_layout().expect("layout");
    // track spans the full rail, midpoint 250
    assert_abs_diff_eq!(layout.left, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.caret_offset, 50.0, epsilon = 1e-9);
}

#[test]
fn tooltip_anchors_sit_on_handle_centers() {
    let mut engine = build_engine();
    engine.set_selected_indices(2, 7).expect("selection");

    // offsets 90 and 340, centered by half the 20px handle
    assert_abs_diff_eq!(
        engine.tooltip_anchor(Handle::Min).expect("anchor"),
        100.0,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        engine.tooltip_anchor(Handle::Max).expect("anchor"),
        350.0,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        engine.handle_offset_percent(Handle::Min).expect("percent"),
        18.0,
        epsilon = 1e-9
    );
}

#[test]
fn merged_label_collapses_equal_values() {
    let mut engine = build_engine();
    engine.set_selected_indices(4, 4).expect("selection");
    assert_eq!(engine.merged_label(), "4");

    engine.set_selected_indices(2, 7).expect("selection");
    assert_eq!(engine.merged_label(), "2 - 7");
}
