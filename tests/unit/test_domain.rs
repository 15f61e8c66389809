use love_route::domain::{
    catalogue::store::Catalogue, preference::entity::SwipeAction, recommendation::filter,
};
use love_route::infrastructure::catalogue::{self, fixture};
use std::collections::{HashMap, HashSet};

fn builtin() -> Catalogue {
    fixture::builtin().expect("fixture is consistent")
}

#[test]
fn builtin_catalogue_is_consistent() {
    let catalogue = builtin();
    assert_eq!(catalogue.cities().len(), 21);
    assert!(catalogue.city("inn").is_some());
    for city in catalogue.cities() {
        let places = catalogue.places_for_city(&city.id);
        assert_eq!(places.len(), 20, "{}", city.id);
        assert!(places.iter().all(|p| p.id.starts_with(&format!("{}-", city.id))));
    }
}

#[test]
fn builtin_places_carry_images_and_two_distinct_tags() {
    let catalogue = builtin();
    for (n, place) in catalogue.places_for_city("tyum").into_iter().enumerate() {
        assert_eq!(
            place.image_url,
            format!("/static/images/tyum/tyum-place-{}.jpg", n + 1)
        );
        assert!(!place.image_attribution.is_empty());
        assert_eq!(place.tags.len(), 2, "{}", place.id);
        assert_ne!(place.tags[0], place.tags[1]);
    }
}

#[test]
fn loading_without_a_directory_gives_the_builtin_catalogue() {
    let loaded = catalogue::load(None).expect("builtin catalogue");
    assert_eq!(loaded.place_count(), builtin().place_count());
    assert_eq!(loaded.cities(), builtin().cities());
}

#[test]
fn liked_lookup_follows_catalogue_order_across_cities() {
    let catalogue = builtin();
    let ids: HashSet<String> = [
        "spb-мост-16",
        "msk-планетарий-20",
        "msk-набережная-2",
        "nowhere-1",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    let found: Vec<&str> = catalogue
        .places_by_ids(&ids)
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(
        found,
        vec!["msk-набережная-2", "msk-планетарий-20", "spb-мост-16"]
    );
}

#[test]
fn swiping_through_a_city_empties_its_feed_only() {
    let catalogue = builtin();
    let decisions: HashMap<String, SwipeAction> = catalogue
        .places_for_city("kzn")
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let action = if i % 3 == 0 {
                SwipeAction::Like
            } else {
                SwipeAction::Skip
            };
            (p.id.clone(), action)
        })
        .collect();

    assert!(filter::unseen(catalogue.places_for_city("kzn"), &decisions).is_empty());
    assert_eq!(
        filter::unseen(catalogue.places_for_city("smr"), &decisions).len(),
        20
    );

    let kzn = filter::progress(catalogue.places_for_city("kzn"), &decisions);
    assert_eq!((kzn.total, kzn.decided, kzn.liked, kzn.remaining), (20, 20, 7, 0));
    let smr = filter::progress(catalogue.places_for_city("smr"), &decisions);
    assert_eq!((smr.decided, smr.remaining), (0, 20));
}
