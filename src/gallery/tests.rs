use crate::model::{Catalog, ImageRecord};

use super::{
    CategoryListing, Direction, GallerySlice, Navigator, NotFound, Route, SubcategoryListing,
    parse_position, resolve_image, subcategory_title, works_label,
};

fn catalog() -> Catalog {
    Catalog::with_default_categories(vec![
        ImageRecord::new("photos", "abstracts", "/gallery/photos/abstracts/a.jpg", "First"),
        ImageRecord::new("photos", "street", "/gallery/photos/street/s1.jpg", "Street one"),
        ImageRecord::new("photos", "abstracts", "/gallery/photos/abstracts/b.jpg", "Second"),
        ImageRecord::new("drawings", "ink_work", "/gallery/drawings/ink_work/i.png", "Ink"),
        ImageRecord::new("photos", "abstracts", "/gallery/photos/abstracts/c.jpg", "Third"),
        ImageRecord::new("photos", "street", "/gallery/photos/street/s2.jpg", "Street two"),
    ])
}

#[test]
fn slice_preserves_catalog_order() {
    let catalog = catalog();
    let slice = GallerySlice::build(&catalog, "photos", "abstracts").expect("slice");
    let alts = slice.iter().map(|record| record.alt.as_str()).collect::<Vec<_>>();
    assert_eq!(alts, vec!["First", "Second", "Third"]);

    let expected = catalog
        .records()
        .iter()
        .filter(|record| record.belongs_to("photos", "abstracts"))
        .count();
    assert_eq!(slice.len(), expected);
}

#[test]
fn slice_indexes_by_src() {
    let catalog = catalog();
    let slice = GallerySlice::build(&catalog, "photos", "street").expect("slice");
    assert_eq!(slice.position_of("/gallery/photos/street/s2.jpg"), Some(1));
    assert_eq!(slice.position_of("/gallery/photos/abstracts/a.jpg"), None);
    assert_eq!(slice.get(0).map(|record| record.alt.as_str()), Some("Street one"));
    assert!(slice.get(2).is_none());
}

#[test]
fn unknown_category_is_rejected_before_filtering() {
    let catalog = Catalog::new(
        vec![ImageRecord::new("sculpture", "clay", "/gallery/x.jpg", "x")],
        ["photos", "drawings"],
    );
    assert_eq!(
        GallerySlice::build(&catalog, "sculpture", "clay").expect_err("unknown"),
        NotFound::UnknownCategory("sculpture".to_string())
    );
}

#[test]
fn unmatched_subcategory_is_not_found() {
    let error = GallerySlice::build(&catalog(), "photos", "landscapes").expect_err("empty");
    assert!(matches!(error, NotFound::EmptyGallery { .. }));
}

#[test]
fn boundary_flags_match_position() {
    let slice = GallerySlice::build(&catalog(), "photos", "abstracts").expect("slice");
    let len = slice.len();
    for position in 0..len {
        let navigator = Navigator::new(slice.clone(), position).expect("navigator");
        assert_eq!(navigator.has_previous(), position > 0);
        assert_eq!(navigator.has_next(), position < len - 1);
        assert_eq!(navigator.len(), len);
        assert!(!navigator.is_empty());
    }
}

#[test]
fn stepping_past_the_ends_is_a_no_op() {
    let slice = GallerySlice::build(&catalog(), "photos", "abstracts").expect("slice");
    let first = Navigator::new(slice.clone(), 0).expect("first");
    assert_eq!(first.previous().position(), 0);

    let last = Navigator::new(slice, 2).expect("last");
    assert_eq!(last.next().position(), 2);
    assert_eq!(last.previous().position(), 1);
    assert!(!last.can_step(Direction::Next));
    assert!(last.can_step(Direction::Previous));
}

#[test]
fn navigator_does_not_wrap() {
    let slice = GallerySlice::build(&catalog(), "photos", "street").expect("slice");
    let mut navigator = Navigator::new(slice, 0).expect("navigator");
    for _ in 0..5 {
        navigator = navigator.next();
    }
    assert_eq!(navigator.position(), 1);
    assert_eq!(navigator.record().alt, "Street two");
}

#[test]
fn out_of_range_position_is_rejected() {
    let slice = GallerySlice::build(&catalog(), "photos", "abstracts").expect("slice");
    assert_eq!(
        Navigator::new(slice, 3).expect_err("out of range"),
        NotFound::PositionOutOfRange { position: 3, len: 3 }
    );
}

#[test]
fn three_image_scenario() {
    let catalog = catalog();
    let navigator = resolve_image(&catalog, "photos", "abstracts", "1").expect("position 1");
    assert_eq!(navigator.record().alt, "Second");
    assert!(navigator.has_previous());
    assert!(navigator.has_next());
    assert_eq!(navigator.counter().to_string(), "2 / 3");

    assert!(matches!(
        resolve_image(&catalog, "photos", "abstracts", "3"),
        Err(NotFound::PositionOutOfRange { .. })
    ));
    assert!(matches!(
        resolve_image(&catalog, "photos", "abstracts", "-1"),
        Err(NotFound::InvalidPosition(_))
    ));
    assert!(matches!(
        resolve_image(&catalog, "photos", "abstracts", "abc"),
        Err(NotFound::InvalidPosition(_))
    ));
}

#[test]
fn position_text_must_be_plain_digits() {
    assert_eq!(parse_position("0"), Ok(0));
    assert_eq!(parse_position("012"), Ok(12));
    for bad in ["", "+1", " 1", "1 ", "1.0", "1e2", "99999999999999999999999999"] {
        assert!(parse_position(bad).is_err(), "accepted `{bad}`");
    }
}

#[test]
fn address_round_trip_reproduces_the_view() {
    let catalog = catalog();
    let slice = GallerySlice::build(&catalog, "photos", "abstracts").expect("slice");
    for position in 0..slice.len() {
        let navigator = Navigator::new(slice.clone(), position).expect("navigator");
        let address = navigator.route().address();
        let Route::Image {
            category,
            subcategory,
            position: parsed,
        } = Route::parse(&address).expect("parse")
        else {
            panic!("expected an image route for {address}");
        };
        let restored =
            resolve_image(&catalog, &category, &subcategory, &parsed.to_string()).expect("resolve");
        assert_eq!(restored.position(), navigator.position());
        assert_eq!(restored.record(), navigator.record());
    }
}

#[test]
fn reserved_characters_in_names_survive_the_round_trip() {
    let names = ["what?", "2019/2020", "100%", "a#b", "black & white", "café"];
    let catalog = Catalog::with_default_categories(
        names
            .iter()
            .map(|name| {
                ImageRecord::new("photos", *name, format!("/gallery/photos/{name}.jpg"), *name)
            })
            .collect::<Vec<_>>(),
    );
    for name in names {
        let slice = GallerySlice::build(&catalog, "photos", name).expect("slice");
        let navigator = Navigator::new(slice, 0).expect("navigator");
        let address = navigator.route().address();
        assert_eq!(Route::parse(&address), Ok(navigator.route()), "{address}");

        let Route::Image {
            category,
            subcategory,
            position,
        } = Route::parse(&address).expect("parse")
        else {
            panic!("expected an image route for {address}");
        };
        let restored = resolve_image(&catalog, &category, &subcategory, &position.to_string())
            .expect("resolve");
        assert_eq!(restored.record(), navigator.record());
    }

    let encoded = Route::Image {
        category: "photos".to_string(),
        subcategory: "what?".to_string(),
        position: 0,
    };
    assert_eq!(encoded.address(), "/gallery/photos/what%3F/0");
    assert_eq!(
        Route::parse("/gallery/photos/2019%2F2020"),
        Ok(Route::Subcategory {
            category: "photos".to_string(),
            subcategory: "2019/2020".to_string()
        })
    );
    assert!(matches!(
        Route::parse("/gallery/photos/%FF"),
        Err(NotFound::UnknownRoute(_))
    ));
}

#[test]
fn routes_parse_every_page_kind() {
    assert_eq!(Route::parse("/"), Ok(Route::Home));
    assert_eq!(
        Route::parse("/gallery/photos/"),
        Ok(Route::Category {
            category: "photos".to_string()
        })
    );
    assert_eq!(
        Route::parse("/gallery/photos/abstracts?ref=share#top"),
        Ok(Route::Subcategory {
            category: "photos".to_string(),
            subcategory: "abstracts".to_string()
        })
    );
    assert_eq!(
        "/gallery/photos/abstracts/4".parse::<Route>(),
        Ok(Route::Image {
            category: "photos".to_string(),
            subcategory: "abstracts".to_string(),
            position: 4
        })
    );
    for bad in ["", "gallery/photos", "/gallery", "/contact/x", "/gallery//abstracts"] {
        assert!(
            matches!(Route::parse(bad), Err(NotFound::UnknownRoute(_))),
            "accepted `{bad}`"
        );
    }
    assert!(matches!(
        Route::parse("/gallery/photos/abstracts/x"),
        Err(NotFound::InvalidPosition(_))
    ));
    assert!(Route::parse("/gallery/photos/abstracts/1/2").is_err());
}

#[test]
fn route_parents_walk_up_the_hierarchy() {
    let image = Route::parse("/gallery/photos/abstracts/2").expect("image");
    assert_eq!(image.parent().address(), "/gallery/photos/abstracts");
    assert_eq!(image.parent().parent().address(), "/gallery/photos");
    assert_eq!(image.parent().parent().parent(), Route::Home);
    assert_eq!(image.category(), Some("photos"));
}

#[test]
fn category_listing_groups_by_subcategory() {
    let listing = CategoryListing::build(&catalog(), "photos").expect("listing");
    assert_eq!(listing.title, "Photos");
    let names = listing
        .sections
        .iter()
        .map(|section| section.subcategory.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["abstracts", "street"]);
    let street = &listing.sections[1];
    assert_eq!(street.href, "/gallery/photos/street");
    assert_eq!(street.images[1].href, "/gallery/photos/street/1");
    assert_eq!(street.images[1].record.alt, "Street two");

    assert!(CategoryListing::build(&catalog(), "video").is_err());
}

#[test]
fn subcategory_listing_links_related_pages() {
    let listing = SubcategoryListing::build(&catalog(), "photos", "street").expect("listing");
    assert_eq!(listing.works, "2 works");
    assert_eq!(listing.back_href, "/gallery/photos");
    assert_eq!(listing.back_label, "Back to Photos");
    assert_eq!(listing.related.len(), 1);
    assert_eq!(listing.related[0].href, "/gallery/photos/abstracts");

    let ink = SubcategoryListing::build(&catalog(), "drawings", "ink_work").expect("ink");
    assert_eq!(ink.title, "Ink Work");
    assert_eq!(ink.works, "1 work");
    assert!(ink.related.is_empty());
}

#[test]
fn titles_and_labels() {
    assert_eq!(subcategory_title("black_and_white"), "Black And White");
    assert_eq!(subcategory_title("abstracts"), "Abstracts");
    assert_eq!(works_label(0), "0 works");
}
