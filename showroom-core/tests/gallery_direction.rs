mod support;

use showroom_core::{
    DEFAULT_GALLERY_INTERVAL, DEFAULT_SLIDE_DISTANCE, Direction,
    ProjectGallery,
};
use support::{advance_secs, secs};

fn gallery() -> ProjectGallery {
    ProjectGallery::mount(DEFAULT_GALLERY_INTERVAL, DEFAULT_SLIDE_DISTANCE)
        .expect("gallery mounts")
}

#[tokio::test(start_paused = true)]
async fn mounts_at_first_project_without_direction() {
    let gallery = gallery();
    assert_eq!(gallery.index(), 0);
    assert_eq!(gallery.direction(), Direction::Still);
    assert_eq!(gallery.offsets().enter_from, 0.0);
    assert_eq!(gallery.current().title, "Windhoek Central Hospital");
}

#[tokio::test(start_paused = true)]
async fn ticks_slide_forward_through_the_wrap() {
    let mut gallery = gallery();
    gallery.go_to(3);

    advance_secs(6).await;
    assert_eq!(gallery.index(), 0);
    assert_eq!(gallery.direction(), Direction::Forward);
    assert_eq!(gallery.offsets().enter_from, DEFAULT_SLIDE_DISTANCE);
    assert_eq!(gallery.offsets().exit_to, -DEFAULT_SLIDE_DISTANCE);
}

#[tokio::test(start_paused = true)]
async fn next_at_last_project_is_forward() {
    let mut gallery = gallery();
    gallery.go_to(3);
    let slide = gallery.next().expect("moved");
    assert_eq!(slide.index, 0);
    assert_eq!(slide.direction, Direction::Forward);
}

#[tokio::test(start_paused = true)]
async fn prev_and_backward_jumps_are_backward() {
    let mut gallery = gallery();

    let slide = gallery.prev().expect("moved");
    assert_eq!(slide.index, 3);
    assert_eq!(slide.direction, Direction::Backward);

    let slide = gallery.go_to(1).expect("moved");
    assert_eq!(slide.direction, Direction::Backward);

    let slide = gallery.go_to(2).expect("moved");
    assert_eq!(slide.direction, Direction::Forward);
}

#[tokio::test(start_paused = true)]
async fn jumping_to_the_active_project_changes_nothing() {
    let mut gallery = gallery();
    let mut updates = gallery.subscribe();
    gallery.prev();
    updates.borrow_and_update();

    advance_secs(2).await;
    assert_eq!(gallery.go_to(3), None);
    assert_eq!(gallery.direction(), Direction::Backward);
    assert!(!updates.has_changed().expect("sender alive"));

    // The ticker kept its original schedule: 6s after mount.
    advance_secs(4).await;
    assert_eq!(gallery.index(), 0);
    assert_eq!(gallery.direction(), Direction::Forward);
}

#[tokio::test(start_paused = true)]
async fn unmounted_gallery_ignores_elapsed_time() {
    let gallery = gallery();
    let updates = gallery.subscribe();
    gallery.unmount();

    advance_secs(30).await;
    assert_eq!(updates.borrow().index, 0);
    assert_eq!(updates.borrow().direction, Direction::Still);
}

#[tokio::test(start_paused = true)]
async fn custom_interval_and_projects() {
    let projects = &showroom_model::PROJECTS[..2];
    let mut gallery = ProjectGallery::mount_with(projects, secs(2), 120.0)
        .expect("gallery mounts");
    assert_eq!(gallery.counter_label(), "01 / 02");

    advance_secs(2).await;
    assert_eq!(gallery.counter_label(), "02 / 02");
    assert_eq!(gallery.offsets().enter_from, 120.0);

    gallery.set_interval(secs(10)).expect("non-zero");
    advance_secs(2).await;
    assert_eq!(gallery.index(), 1);
}
