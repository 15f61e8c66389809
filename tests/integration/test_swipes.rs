use super::helpers::{
    BACKENDS, expect_status, get, place_ids, read_json, register_user, send, spawn_app, swipe,
    unique_email,
};
use axum::http::StatusCode;
use serde_json::Value;

const FIRST: &str = "msk-центральный-парк-1";
const SECOND: &str = "msk-набережная-2";
const THIRD: &str = "msk-старый-город-3";

#[tokio::test]
async fn liking_a_place_hides_it_and_keeps_catalogue_order() {
    for backend in BACKENDS {
        let app = spawn_app(backend).await;
        let token = register_user(&app.app, &unique_email("order"), "msk").await;

        let before = send(&app.app, get("/api/v1/places?city_id=msk", Some(&token))).await;
        let before: Value = read_json(expect_status(before, StatusCode::OK).await).await;
        let before = place_ids(&before);
        assert_eq!(before.len(), 20, "{}", app.backend);
        assert_eq!(&before[..3], [FIRST, SECOND, THIRD]);

        assert_eq!(swipe(&app.app, &token, SECOND, "like").await, StatusCode::OK);

        let after = send(&app.app, get("/api/v1/places?city_id=msk", Some(&token))).await;
        let after: Value = read_json(expect_status(after, StatusCode::OK).await).await;
        let after = place_ids(&after);
        let expected: Vec<String> = before.into_iter().filter(|id| id != SECOND).collect();
        assert_eq!(after, expected, "{}", app.backend);
    }
}

#[tokio::test]
async fn second_swipe_on_a_place_replaces_the_first() {
    for backend in BACKENDS {
        let app = spawn_app(backend).await;
        let token = register_user(&app.app, &unique_email("flip"), "msk").await;

        assert_eq!(swipe(&app.app, &token, FIRST, "like").await, StatusCode::OK);
        assert_eq!(swipe(&app.app, &token, FIRST, "skip").await, StatusCode::OK);

        let history = send(&app.app, get("/api/v1/me/decisions", Some(&token))).await;
        let history: Value = read_json(expect_status(history, StatusCode::OK).await).await;
        let history = history.as_array().expect("decisions array");
        assert_eq!(history.len(), 1, "{}", app.backend);
        assert_eq!(history[0]["place_id"], FIRST);
        assert_eq!(history[0]["action"], "skip");

        let liked = send(&app.app, get("/api/v1/me/liked-places", Some(&token))).await;
        let liked: Value = read_json(expect_status(liked, StatusCode::OK).await).await;
        assert!(place_ids(&liked).is_empty(), "{}", app.backend);
    }
}

#[tokio::test]
async fn guests_and_bad_tokens_see_the_whole_city() {
    for backend in BACKENDS {
        let app = spawn_app(backend).await;
        let token = register_user(&app.app, &unique_email("guest"), "spb").await;
        assert_eq!(swipe(&app.app, &token, FIRST, "skip").await, StatusCode::OK);

        let guest = send(&app.app, get("/api/v1/places?city_id=msk", None)).await;
        let guest: Value = read_json(expect_status(guest, StatusCode::OK).await).await;
        assert_eq!(place_ids(&guest).len(), 20, "{}", app.backend);

        let forged = send(
            &app.app,
            get("/api/v1/places?city_id=msk", Some("garbage-token")),
        )
        .await;
        let forged: Value = read_json(expect_status(forged, StatusCode::OK).await).await;
        assert_eq!(place_ids(&forged).len(), 20, "{}", app.backend);
    }
}

#[tokio::test]
async fn decisions_are_private_to_each_user() {
    for backend in BACKENDS {
        let app = spawn_app(backend).await;
        let alice = register_user(&app.app, &unique_email("alice"), "msk").await;
        let bob = register_user(&app.app, &unique_email("bob"), "msk").await;

        assert_eq!(swipe(&app.app, &alice, FIRST, "like").await, StatusCode::OK);

        let bobs_view = send(&app.app, get("/api/v1/places?city_id=msk", Some(&bob))).await;
        let bobs_view: Value = read_json(expect_status(bobs_view, StatusCode::OK).await).await;
        assert!(place_ids(&bobs_view).contains(&FIRST.to_string()), "{}", app.backend);

        let bobs_likes = send(&app.app, get("/api/v1/me/liked-places", Some(&bob))).await;
        let bobs_likes: Value = read_json(expect_status(bobs_likes, StatusCode::OK).await).await;
        assert!(place_ids(&bobs_likes).is_empty(), "{}", app.backend);
    }
}

#[tokio::test]
async fn city_query_accepts_camel_case_and_short_names() {
    for backend in BACKENDS {
        let app = spawn_app(backend).await;
        let token = register_user(&app.app, &unique_email("alias"), "msk").await;
        assert_eq!(swipe(&app.app, &token, FIRST, "like").await, StatusCode::OK);

        for uri in ["/api/v1/places?cityId=msk", "/api/v1/places?city=msk"] {
            let res = send(&app.app, get(uri, Some(&token))).await;
            let places: Value = read_json(expect_status(res, StatusCode::OK).await).await;
            let ids = place_ids(&places);
            assert_eq!(ids.len(), 19, "{} {}", app.backend, uri);
            assert!(!ids.contains(&FIRST.to_string()));
        }

        let res = send(&app.app, get("/api/v1/me/progress?cityId=spb", Some(&token))).await;
        let progress: Value = read_json(expect_status(res, StatusCode::OK).await).await;
        assert_eq!(progress["city_id"], "spb", "{}", app.backend);
        assert_eq!(progress["decided"], 0);

        let res = send(&app.app, get("/api/v1/me/progress?city=msk", Some(&token))).await;
        let progress: Value = read_json(expect_status(res, StatusCode::OK).await).await;
        assert_eq!(progress["liked"], 1, "{}", app.backend);
    }
}

#[tokio::test]
async fn places_listing_needs_a_city() {
    for backend in BACKENDS {
        let app = spawn_app(backend).await;

        let missing = send(&app.app, get("/api/v1/places", None)).await;
        expect_status(missing, StatusCode::BAD_REQUEST).await;

        let blank = send(&app.app, get("/api/v1/places?city_id=", None)).await;
        expect_status(blank, StatusCode::BAD_REQUEST).await;

        let unknown = send(&app.app, get("/api/v1/places?city_id=atlantis", None)).await;
        let unknown: Value = read_json(expect_status(unknown, StatusCode::OK).await).await;
        assert!(place_ids(&unknown).is_empty(), "{}", app.backend);
    }
}

#[tokio::test]
async fn bad_swipes_are_rejected() {
    for backend in BACKENDS {
        let app = spawn_app(backend).await;
        let token = register_user(&app.app, &unique_email("bad"), "msk").await;

        assert_eq!(
            swipe(&app.app, &token, FIRST, "love").await,
            StatusCode::BAD_REQUEST,
            "{}",
            app.backend
        );
        assert_eq!(
            swipe(&app.app, &token, "msk-nowhere-99", "like").await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(swipe(&app.app, &token, "", "like").await, StatusCode::BAD_REQUEST);
        assert_eq!(
            swipe(&app.app, "not.a.jwt", FIRST, "like").await,
            StatusCode::UNAUTHORIZED
        );

        let history = send(&app.app, get("/api/v1/me/decisions", Some(&token))).await;
        let history: Value = read_json(expect_status(history, StatusCode::OK).await).await;
        assert!(history.as_array().expect("array").is_empty(), "{}", app.backend);
    }
}

#[tokio::test]
async fn progress_counts_only_the_requested_city() {
    for backend in BACKENDS {
        let app = spawn_app(backend).await;
        let token = register_user(&app.app, &unique_email("progress"), "msk").await;

        assert_eq!(swipe(&app.app, &token, FIRST, "like").await, StatusCode::OK);
        assert_eq!(swipe(&app.app, &token, SECOND, "skip").await, StatusCode::OK);
        assert_eq!(
            swipe(&app.app, &token, "spb-набережная-2", "like").await,
            StatusCode::OK
        );

        let own_city = send(&app.app, get("/api/v1/me/progress", Some(&token))).await;
        let own_city: Value = read_json(expect_status(own_city, StatusCode::OK).await).await;
        assert_eq!(own_city["city_id"], "msk", "{}", app.backend);
        assert_eq!(own_city["total"], 20);
        assert_eq!(own_city["decided"], 2);
        assert_eq!(own_city["liked"], 1);
        assert_eq!(own_city["remaining"], 18);

        let spb = send(&app.app, get("/api/v1/me/progress?city_id=spb", Some(&token))).await;
        let spb: Value = read_json(expect_status(spb, StatusCode::OK).await).await;
        assert_eq!(spb["decided"], 1, "{}", app.backend);
        assert_eq!(spb["remaining"], 19);

        let unknown = send(
            &app.app,
            get("/api/v1/me/progress?city_id=atlantis", Some(&token)),
        )
        .await;
        expect_status(unknown, StatusCode::NOT_FOUND).await;
    }
}

#[tokio::test]
async fn concurrent_swipes_on_one_place_leave_one_decision() {
    for backend in BACKENDS {
        let app = spawn_app(backend).await;
        let token = register_user(&app.app, &unique_email("burst"), "msk").await;

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let router = app.app.clone();
                let token = token.clone();
                tokio::spawn(async move {
                    let action = if i % 2 == 0 { "like" } else { "skip" };
                    swipe(&router, &token, THIRD, action).await
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.expect("task completes"), StatusCode::OK);
        }

        let history = send(&app.app, get("/api/v1/me/decisions", Some(&token))).await;
        let history: Value = read_json(expect_status(history, StatusCode::OK).await).await;
        assert_eq!(history.as_array().expect("array").len(), 1, "{}", app.backend);
    }
}
