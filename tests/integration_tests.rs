//! Integration tests using a mock HTTP server
//!
//! Exercise the full flow: endpoint method → URL building → transport →
//! status routing → shape decoding, through the public API only.

use serde_json::json;
use supercell_api::clash_of_clans::{ClanSearch, ClashOfClansApi};
use supercell_api::clash_royale::ClashRoyaleApi;
use supercell_api::{Error, PageRequest};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn clan_lookup_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clans/%238QU8J9LP"))
        .and(header("authorization", "Bearer integration-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag": "#8QU8J9LP",
            "name": "Lost Souls",
            "clanLevel": 19,
            "members": 47,
            "chatLanguage": {"id": 75000000, "name": "English", "languageCode": "EN"},
            "labels": [
                {"id": 56000000, "name": "Clan Wars"},
                {"id": 56000001, "name": "Clan War League"},
            ],
            "memberList": [
                {"tag": "#L1", "name": "one", "role": "leader", "trophies": 5400},
                {"tag": "#L2", "name": "two", "role": "coLeader", "trophies": 5100},
            ],
        })))
        .mount(&mock_server)
        .await;

    let api = ClashOfClansApi::with_base_url(&mock_server.uri(), "integration-token").unwrap();
    let clan = api.get_clan("#8QU8J9LP").await.unwrap();

    assert!(clan.is_success());
    assert_eq!(clan.get_str("name"), Some("Lost Souls"));
    assert_eq!(clan.get_i64("members"), Some(47));

    let language = clan.get_object("chatLanguage").unwrap();
    assert_eq!(language.get_str("languageCode"), Some("EN"));

    let labels = clan.get_objects("labels").unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[1].get_str("name"), Some("Clan War League"));

    // Rendering is stable and re-renderable.
    let rendered = clan.to_string();
    assert!(rendered.starts_with("Clan(\n"));
    assert_eq!(clan.to_string(), rendered);
}

#[tokio::test]
async fn pagination_cursors_round_trip() {
    let mock_server = MockServer::start().await;

    // Mounted first so the cursored request matches it before the
    // broader first-page mock below.
    Mock::given(method("GET"))
        .and(path("/v1/clans"))
        .and(query_param("name", "lost"))
        .and(query_param("limit", "2"))
        .and(query_param("after", "eyJwb3MiOjJ9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"tag": "#CCC", "name": "lost three"}],
            "paging": {"cursors": {"before": "eyJwb3MiOjJ9"}},
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/clans"))
        .and(query_param("name", "lost"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"tag": "#AAA", "name": "lost one"},
                {"tag": "#BBB", "name": "lost two"},
            ],
            "paging": {"cursors": {"after": "eyJwb3MiOjJ9"}},
        })))
        .mount(&mock_server)
        .await;

    let api = ClashOfClansApi::with_base_url(&mock_server.uri(), "integration-token").unwrap();

    let first = api
        .search_clans(ClanSearch::new().name("lost").page(PageRequest::new().limit(2)))
        .await
        .unwrap();
    assert_eq!(first.items().map(<[_]>::len), Some(2));

    let cursor = first.cursor_after().unwrap().to_owned();
    let second = api
        .search_clans(
            ClanSearch::new()
                .name("lost")
                .page(PageRequest::new().limit(2).after(cursor)),
        )
        .await
        .unwrap();

    let items = second.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].get_str("tag"), Some("#CCC"));
    assert_eq!(second.cursor_after(), None);
    assert_eq!(second.cursor_before(), Some("eyJwb3MiOjJ9"));
}

#[tokio::test]
async fn vendor_error_bodies_decode_into_api_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/players/%23MISSING"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "reason": "notFound",
            "message": "Resource was not found",
            "type": "clientError",
            "detail": {"resource": "player"},
        })))
        .mount(&mock_server)
        .await;

    let api = ClashRoyaleApi::with_base_url(&mock_server.uri(), "integration-token").unwrap();
    let err = api.get_player("#MISSING").await.unwrap_err();

    match err {
        Error::Api(result) => {
            assert_eq!(result.status(), 404);
            assert_eq!(result.reason(), Some("notFound"));
            assert_eq!(result.message(), "Resource was not found");
            assert_eq!(result.kind(), Some("clientError"));
            assert_eq!(result.detail(), Some(&json!({"resource": "player"})));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_without_body_still_reports_the_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clans/%23X"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let api = ClashRoyaleApi::with_base_url(&mock_server.uri(), "integration-token").unwrap();
    let err = api.get_clan("#X").await.unwrap_err();

    let result = err.as_api().expect("expected an API error");
    assert_eq!(result.status(), 403);
    assert_eq!(result.message(), "Unknown error");
}
