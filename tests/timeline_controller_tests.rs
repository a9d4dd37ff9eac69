use std::time::Duration;

use playaxis::interaction::{
    DEFAULT_PLAY_INTERVAL, TimelineController, TimelineMode, TimelineStep,
};

fn ready(group_count: usize) -> TimelineController {
    let mut controller = TimelineController::default();
    controller.on_structural_update(group_count);
    controller
}

#[test]
fn structural_update_selects_the_most_recent_group() {
    let controller = ready(3);

    assert_eq!(controller.mode(), TimelineMode::Ready);
    assert_eq!(controller.current_index(), 2);
    assert!(!controller.state().is_playing);
}

#[test]
fn play_from_last_group_restarts_and_stops_at_the_end() {
    let mut controller = ready(3);
    assert_eq!(controller.play_interval(), Duration::from_millis(800));
    assert_eq!(DEFAULT_PLAY_INTERVAL, Duration::from_millis(800));

    assert_eq!(controller.play(), TimelineStep::Committed { index: 0 });
    assert_eq!(controller.mode(), TimelineMode::Playing);

    assert_eq!(controller.advance(Duration::from_millis(799)), TimelineStep::None);
    assert_eq!(
        controller.advance(Duration::from_millis(1)),
        TimelineStep::Tick {
            index: 1,
            finished: false
        }
    );
    assert_eq!(
        controller.advance(Duration::from_millis(800)),
        TimelineStep::Tick {
            index: 2,
            finished: true
        }
    );

    assert_eq!(controller.mode(), TimelineMode::Ready);
    assert!(!controller.state().is_playing);
    assert_eq!(controller.advance(Duration::from_secs(5)), TimelineStep::None);
    assert_eq!(controller.current_index(), 2);
}

#[test]
fn play_from_the_middle_continues_without_restart() {
    let mut controller = ready(5);
    controller.commit_drag(1);

    assert_eq!(controller.play(), TimelineStep::None);
    assert!(controller.is_playing());
    assert_eq!(
        controller.advance(Duration::from_millis(800)),
        TimelineStep::Tick {
            index: 2,
            finished: false
        }
    );
}

#[test]
fn pause_is_idempotent_and_keeps_the_index() {
    let mut controller = ready(4);
    controller.play();
    controller.advance(Duration::from_millis(800));
    controller.pause();
    controller.pause();

    assert_eq!(controller.mode(), TimelineMode::Ready);
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.time_until_next_tick(), None);
}

#[test]
fn drag_previews_without_committing() {
    let mut controller = ready(4);

    assert_eq!(controller.begin_drag(), TimelineStep::Preview { index: 3 });
    assert_eq!(controller.drag(1), TimelineStep::Preview { index: 1 });
    assert_eq!(controller.drag(1), TimelineStep::None);
    assert_eq!(controller.mode(), TimelineMode::Dragging);
    assert_eq!(controller.current_index(), 3);
    assert_eq!(controller.display_index(), 1);

    assert_eq!(controller.commit_drag(1), TimelineStep::Committed { index: 1 });
    assert_eq!(controller.mode(), TimelineMode::Ready);
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.state().drag_preview_index, None);
}

#[test]
fn scrubbing_during_playback_stops_the_timer() {
    let mut controller = ready(6);
    controller.commit_drag(0);
    controller.play();
    controller.advance(Duration::from_millis(400));

    controller.begin_drag();
    assert!(!controller.state().is_playing);
    assert_eq!(controller.advance(Duration::from_secs(2)), TimelineStep::None);
    controller.commit_drag(4);
    assert_eq!(controller.current_index(), 4);
}

#[test]
fn out_of_range_indices_clamp_to_the_last_group() {
    let mut controller = ready(3);

    controller.commit_drag(0);
    assert_eq!(controller.drag(9), TimelineStep::Preview { index: 2 });
    assert_eq!(controller.commit_drag(42), TimelineStep::Committed { index: 2 });
}

#[test]
fn new_structural_update_cancels_playback() {
    let mut controller = ready(3);
    controller.play();
    controller.on_structural_update(5);

    assert_eq!(controller.mode(), TimelineMode::Ready);
    assert_eq!(controller.current_index(), 4);
    assert_eq!(controller.time_until_next_tick(), None);
}

#[test]
fn resize_keeps_the_current_index() {
    let mut controller = ready(5);
    controller.commit_drag(2);

    assert_eq!(controller.on_resize_update(), 2);
    assert_eq!(controller.current_index(), 2);
}

#[test]
fn zero_groups_return_to_idle() {
    let mut controller = ready(3);
    controller.on_structural_update(0);

    assert_eq!(controller.mode(), TimelineMode::Idle);
    assert_eq!(controller.play(), TimelineStep::None);
}

#[test]
fn time_until_next_tick_counts_down() {
    let mut controller = TimelineController::new(Duration::from_millis(500));
    controller.on_structural_update(4);
    controller.commit_drag(0);
    controller.play();
    controller.advance(Duration::from_millis(200));

    assert_eq!(
        controller.time_until_next_tick(),
        Some(Duration::from_millis(300))
    );
}
