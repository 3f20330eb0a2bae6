//! Endpoint tests against a mock server.

use super::{ClanSearch, ClashRoyaleApi};
use crate::api::PageRequest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ClashRoyaleApi {
    ClashRoyaleApi::with_base_url(&server.uri(), "test-token").unwrap()
}

#[tokio::test]
async fn get_player_decodes_nested_statistics() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/players/%23PLAYER"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag": "#PLAYER",
            "name": "delta",
            "trophies": 6200,
            "arena": {"id": 54000014, "name": "Legendary Arena"},
            "leagueStatistics": {
                "currentSeason": {"trophies": 6200, "rank": 912},
                "bestSeason": {"id": "2026-07", "trophies": 6400},
            },
            "currentDeck": [
                {"id": 26000000, "name": "Knight", "level": 14},
                {"id": 28000000, "name": "Fireball", "level": 12},
            ],
        })))
        .mount(&server)
        .await;

    let player = api(&server).get_player("#PLAYER").await.unwrap();

    assert_eq!(player.get_i64("trophies"), Some(6200));
    let stats = player.get_object("leagueStatistics").unwrap();
    let best = stats.get_object("bestSeason").unwrap();
    assert_eq!(best.get_str("id"), Some("2026-07"));
    let deck = player.get_objects("currentDeck").unwrap();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck[1].get_str("name"), Some("Fireball"));
}

#[tokio::test]
async fn battle_log_is_a_bare_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/players/%23PLAYER/battlelog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "type": "PvP",
                "battleTime": "20260830T120000.000Z",
                "gameMode": {"id": 72000006, "name": "Ladder"},
                "team": [{"tag": "#PLAYER", "crowns": 3}],
                "opponent": [{"tag": "#FOE", "crowns": 1}],
            },
            {"type": "riverRacePvP", "boatBattleWon": true},
        ])))
        .mount(&server)
        .await;

    let battles = api(&server)
        .get_player_battles("#PLAYER")
        .await
        .unwrap();

    assert_eq!(battles.len(), 2);
    assert_eq!(battles[0].get_str("type"), Some("PvP"));
    let team = battles[0].get_objects("team").unwrap();
    assert_eq!(team[0].get_i64("crowns"), Some(3));
    assert_eq!(battles[1].get_bool("boatBattleWon"), Some(true));
}

#[tokio::test]
async fn search_clans_sends_criteria() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clans"))
        .and(query_param("name", "royale"))
        .and(query_param("minScore", "40000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"tag": "#1", "name": "royale one", "clanScore": 45000}],
            "paging": {"cursors": {}},
        })))
        .mount(&server)
        .await;

    let page = api(&server)
        .search_clans(ClanSearch::new().name("royale").min_score(40_000))
        .await
        .unwrap();

    assert_eq!(page.items().unwrap()[0].get_i64("clanScore"), Some(45_000));
}

#[tokio::test]
async fn current_river_race_decodes_period_logs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clans/%23CLAN/currentriverrace"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "full",
            "sectionIndex": 2,
            "clan": {"tag": "#CLAN", "fame": 1800},
            "periodLogs": [{
                "periodIndex": 5,
                "items": [{"clan": {"tag": "#CLAN"}, "pointsEarned": 300}],
            }],
        })))
        .mount(&server)
        .await;

    let race = api(&server)
        .get_current_river_race("#CLAN")
        .await
        .unwrap();

    assert_eq!(race.get_str("state"), Some("full"));
    let logs = race.get_objects("periodLogs").unwrap();
    let entries = logs[0].get_objects("items").unwrap();
    assert_eq!(entries[0].get_i64("pointsEarned"), Some(300));
    assert_eq!(entries[0].get_object("clan").unwrap().get_str("tag"), Some("#CLAN"));
}

#[tokio::test]
async fn global_seasons_use_the_global_location_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/locations/global/seasons/2026-08/rankings/players"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"tag": "#A", "rank": 1},
                {"tag": "#B", "rank": 2},
                {"tag": "#C", "rank": 3},
            ],
        })))
        .mount(&server)
        .await;

    let rankings = api(&server)
        .get_top_player_league_season_rankings("2026-08", PageRequest::new().limit(3))
        .await
        .unwrap();

    let items = rankings.items().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].get_i64("rank"), Some(3));
}

#[tokio::test]
async fn global_tournaments_are_a_bare_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/globaltournaments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "tag": "#GT",
            "title": "Global Tournament",
            "milestoneRewards": [
                {"type": "card", "card": {"name": "Mirror", "id": 28000006}, "wins": 10},
            ],
        }])))
        .mount(&server)
        .await;

    let tournaments = api(&server).get_global_tournaments().await.unwrap();

    assert_eq!(tournaments.len(), 1);
    let rewards = tournaments[0].get_objects("milestoneRewards").unwrap();
    let card = rewards[0].get_object("card").unwrap();
    assert_eq!(card.get_str("name"), Some("Mirror"));
}

#[tokio::test]
async fn verify_player_token_posts_the_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/players/%23PLAYER/verifytoken"))
        .and(body_json(json!({"token": "deadbeef"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag": "#PLAYER",
            "status": "invalid",
        })))
        .mount(&server)
        .await;

    let verification = api(&server)
        .verify_player_token("#PLAYER", "deadbeef")
        .await
        .unwrap();

    assert_eq!(verification.get_str("status"), Some("invalid"));
}

#[tokio::test]
async fn maintenance_errors_carry_the_vendor_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/clans/%23CLAN"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "reason": "inMaintenance",
            "message": "Service is temporarily unavailable",
        })))
        .mount(&server)
        .await;

    let config = crate::http::HttpClientConfig::builder().max_retries(0).build();
    let client =
        crate::api::ApiClient::with_config(&server.uri(), super::VERSION, "test-token", config)
            .unwrap();

    // The raw escape hatch hands back the status and body untouched.
    let (status, body) = client
        .get(&["clans", "#CLAN"], &crate::api::Query::new())
        .await
        .unwrap();
    assert_eq!(status, 503);
    assert_eq!(body.unwrap()["reason"], "inMaintenance");
}
