use crate::gallery::{Direction, NotFound, Route};
use crate::model::{Catalog, ImageRecord};

use super::{
    DismissTarget, SwipeTracker, ViewerController, ViewerInput, ViewerKey, ViewerOptions,
    ViewerOutcome, swipe_direction,
};

fn catalog() -> Catalog {
    Catalog::with_default_categories(vec![
        ImageRecord::new("photos", "abstracts", "/gallery/photos/abstracts/a.jpg", "First"),
        ImageRecord::new("photos", "abstracts", "/gallery/photos/abstracts/b.jpg", ""),
        ImageRecord::new("photos", "abstracts", "/gallery/photos/abstracts/c.jpg", "Third"),
    ])
}

fn open(position: &str) -> ViewerController {
    ViewerController::open(
        &catalog(),
        "photos",
        "abstracts",
        position,
        ViewerOptions::default(),
    )
    .expect("viewer")
}

#[test]
fn arrow_keys_move_and_update_the_address() {
    let mut viewer = open("0");
    assert_eq!(viewer.address(), "/gallery/photos/abstracts/0");

    let outcome = viewer.handle(ViewerKey::ArrowRight.input());
    assert_eq!(
        outcome,
        ViewerOutcome::Moved(Route::Image {
            category: "photos".to_string(),
            subcategory: "abstracts".to_string(),
            position: 1,
        })
    );
    assert_eq!(viewer.address(), "/gallery/photos/abstracts/1");
    assert_eq!(viewer.counter().to_string(), "2 / 3");

    viewer.handle(ViewerKey::ArrowLeft.input());
    assert_eq!(viewer.navigator().position(), 0);
}

#[test]
fn boundary_input_is_ignored() {
    let mut first = open("0");
    assert_eq!(first.handle(ViewerInput::Backward), ViewerOutcome::Ignored);
    assert_eq!(first.address(), "/gallery/photos/abstracts/0");
    assert!(!first.shows_previous_control());

    let mut last = open("2");
    assert_eq!(last.handle(ViewerInput::Forward), ViewerOutcome::Ignored);
    assert_eq!(last.handle(ViewerInput::Swipe { dx: -120.0 }), ViewerOutcome::Ignored);
    assert!(!last.shows_next_control());
    assert_eq!(last.navigator().position(), 2);
}

#[test]
fn dismiss_target_is_configurable() {
    let mut viewer = open("1");
    assert_eq!(
        viewer.handle(ViewerKey::Escape.input()),
        ViewerOutcome::Dismissed(Route::Subcategory {
            category: "photos".to_string(),
            subcategory: "abstracts".to_string(),
        })
    );

    let options = ViewerOptions {
        dismiss: DismissTarget::Category,
        ..ViewerOptions::default()
    };
    let mut viewer =
        ViewerController::open(&catalog(), "photos", "abstracts", "0", options).expect("viewer");
    assert_eq!(
        viewer.handle(ViewerInput::Dismiss),
        ViewerOutcome::Dismissed(Route::Category {
            category: "photos".to_string()
        })
    );
}

#[test]
fn swipes_respect_the_threshold() {
    let mut viewer = open("1");
    assert_eq!(viewer.handle(ViewerInput::Swipe { dx: 49.0 }), ViewerOutcome::Ignored);
    assert_eq!(viewer.handle(ViewerInput::Swipe { dx: -10.0 }), ViewerOutcome::Ignored);
    assert_eq!(viewer.navigator().position(), 1);

    assert!(matches!(
        viewer.handle(ViewerInput::Swipe { dx: 80.0 }),
        ViewerOutcome::Moved(_)
    ));
    assert_eq!(viewer.navigator().position(), 0);

    assert!(matches!(
        viewer.handle(ViewerInput::Swipe { dx: -50.0 }),
        ViewerOutcome::Moved(_)
    ));
    assert_eq!(viewer.navigator().position(), 1);
}

#[test]
fn swipe_direction_classification() {
    assert_eq!(swipe_direction(50.0, 50.0), Some(Direction::Previous));
    assert_eq!(swipe_direction(-75.5, 50.0), Some(Direction::Next));
    assert_eq!(swipe_direction(0.0, 50.0), None);
    assert_eq!(swipe_direction(f32::NAN, 50.0), None);
}

#[test]
fn swipe_tracker_reports_displacement_at_release() {
    let mut tracker = SwipeTracker::default();
    assert_eq!(tracker.finish(), None);

    tracker.begin(300.0);
    tracker.update(280.0);
    tracker.update(220.0);
    assert!(tracker.is_active());
    assert_eq!(tracker.finish(), Some(ViewerInput::Swipe { dx: -80.0 }));
    assert!(!tracker.is_active());

    tracker.update(10.0);
    assert_eq!(tracker.finish(), None);

    tracker.begin(0.0);
    tracker.cancel();
    assert_eq!(tracker.finish(), None);
}

#[test]
fn caption_is_hidden_for_empty_alt_text() {
    let mut viewer = open("0");
    assert_eq!(viewer.caption(), Some("First"));
    viewer.handle(ViewerInput::Forward);
    assert_eq!(viewer.caption(), None);
}

#[test]
fn reopening_the_address_reproduces_the_view() {
    let catalog = catalog();
    let mut viewer = open("0");
    viewer.handle(ViewerInput::Forward);
    viewer.handle(ViewerInput::Forward);

    let reopened = ViewerController::open_address(&catalog, viewer.address(), viewer.options())
        .expect("reopen");
    assert_eq!(reopened.navigator().position(), 2);
    assert_eq!(reopened.record(), viewer.record());
}

#[test]
fn open_address_rejects_non_image_pages() {
    let catalog = catalog();
    let options = ViewerOptions::default();
    assert!(matches!(
        ViewerController::open_address(&catalog, "/gallery/photos/abstracts", options),
        Err(NotFound::UnknownRoute(_))
    ));
    assert!(matches!(
        ViewerController::open_address(&catalog, "/gallery/photos/abstracts/9", options),
        Err(NotFound::PositionOutOfRange { .. })
    ));
    assert!(matches!(
        ViewerController::open_address(&catalog, "/gallery/video/abstracts/0", options),
        Err(NotFound::UnknownCategory(_))
    ));
}
