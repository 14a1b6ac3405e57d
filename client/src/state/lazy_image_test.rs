use super::*;

fn request() -> ImageRequest {
    ImageRequest::new("/images/tandir-mosaic-70.png", "Tandir 70 sm")
}

fn hit() -> [Intersection; 1] {
    [Intersection::entering(0.05)]
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_loader_has_no_source_and_shows_placeholder() {
    let loader = LazyLoader::new();
    let req = request();
    assert_eq!(loader.state(), LoadState::NotRequested);
    assert_eq!(loader.src(&req), None);
    assert!(loader.shows_placeholder());
    assert!(loader.is_watching());
}

#[test]
fn off_screen_batches_never_request_the_source() {
    let mut loader = LazyLoader::new();
    let req = request();
    for _ in 0..50 {
        assert!(!loader.observe(&[Intersection::outside()]));
    }
    assert_eq!(loader.src(&req), None);
    assert!(loader.shows_placeholder());
    assert!(loader.is_watching());
}

// =============================================================
// NotRequested -> InView
// =============================================================

#[test]
fn first_intersecting_batch_attaches_source_and_releases_watch() {
    let mut loader = LazyLoader::new();
    let req = request();
    assert!(loader.observe(&hit()));
    assert_eq!(loader.state(), LoadState::InView);
    assert_eq!(loader.src(&req), Some("/images/tandir-mosaic-70.png"));
    assert!(!loader.is_watching());
    assert!(loader.shows_placeholder());
}

#[test]
fn mixed_batch_with_one_hit_counts_as_in_view() {
    let mut loader = LazyLoader::new();
    assert!(loader.observe(&[Intersection::outside(), Intersection::entering(0.01)]));
    assert_eq!(loader.state(), LoadState::InView);
}

#[test]
fn leaving_viewport_after_in_view_does_not_revert() {
    let mut loader = LazyLoader::new();
    loader.observe(&hit());
    loader.observe(&[Intersection::outside()]);
    assert_eq!(loader.state(), LoadState::InView);
}

// =============================================================
// InView -> Loaded / Failed
// =============================================================

#[test]
fn load_before_in_view_is_ignored() {
    let mut loader = LazyLoader::new();
    loader.mark_loaded();
    assert_eq!(loader.state(), LoadState::NotRequested);
    assert!(loader.shows_placeholder());
}

#[test]
fn load_completion_removes_placeholder_for_good() {
    let mut loader = LazyLoader::new();
    loader.observe(&hit());
    loader.mark_loaded();
    assert_eq!(loader.state(), LoadState::Loaded);
    assert!(!loader.shows_placeholder());

    loader.observe(&[Intersection::outside()]);
    loader.mark_failed();
    loader.release();
    assert_eq!(loader.state(), LoadState::Loaded);
    assert!(!loader.shows_placeholder());
}

#[test]
fn error_keeps_placeholder_and_is_terminal() {
    let mut loader = LazyLoader::new();
    let req = request();
    loader.observe(&hit());
    loader.mark_failed();
    assert_eq!(loader.state(), LoadState::Failed);
    assert!(loader.shows_placeholder());
    assert_eq!(loader.src(&req), Some("/images/tandir-mosaic-70.png"));

    loader.mark_loaded();
    assert_eq!(loader.state(), LoadState::Failed);
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn release_before_any_signal_ignores_later_synthetic_batches() {
    let mut loader = LazyLoader::new();
    let req = request();
    loader.release();
    assert!(!loader.is_watching());

    assert!(loader.observe(&hit()));
    assert_eq!(loader.state(), LoadState::NotRequested);
    assert_eq!(loader.src(&req), None);
}

#[test]
fn missing_observer_requests_the_source_immediately() {
    let mut loader = LazyLoader::new();
    let req = request();
    loader.observer_unavailable();
    assert_eq!(loader.state(), LoadState::InView);
    assert_eq!(loader.src(&req), Some("/images/tandir-mosaic-70.png"));
    assert!(!loader.is_watching());

    loader.mark_loaded();
    assert!(!loader.shows_placeholder());
}

#[test]
fn missing_observer_after_teardown_changes_nothing() {
    let mut loader = LazyLoader::new();
    loader.release();
    loader.observer_unavailable();
    assert_eq!(loader.state(), LoadState::NotRequested);
}

#[test]
fn release_is_idempotent() {
    let mut loader = LazyLoader::new();
    loader.release();
    loader.release();
    assert_eq!(loader, {
        let mut other = LazyLoader::new();
        other.release();
        other
    });
}

// =============================================================
// Responsive attributes
// =============================================================

#[test]
fn srcset_is_gated_like_src() {
    let req = request().with_responsive(
        Some("(max-width: 640px) 320px, 640px".to_owned()),
        Some("/a-320.webp 320w, /a.webp 640w".to_owned()),
    );
    let mut loader = LazyLoader::new();
    assert_eq!(loader.srcset(&req), None);
    loader.observe(&hit());
    assert_eq!(loader.srcset(&req), Some("/a-320.webp 320w, /a.webp 640w"));
}

#[test]
fn srcset_absent_when_request_has_none() {
    let mut loader = LazyLoader::new();
    loader.observe(&hit());
    assert_eq!(loader.srcset(&request()), None);
}

#[test]
fn load_state_names_are_stable() {
    assert_eq!(LoadState::NotRequested.as_str(), "not-requested");
    assert_eq!(LoadState::InView.as_str(), "in-view");
    assert_eq!(LoadState::Loaded.as_str(), "loaded");
    assert_eq!(LoadState::Failed.as_str(), "failed");
}
