//! Clash of Clans API client.
//!
//! One method per vendor endpoint at `https://api.clashofclans.com/v1`.
//! Tags are passed as-is (`#2PP0VVLL`); percent-encoding happens when the
//! URL is built.

use serde_json::json;

use crate::api::{ApiClient, PageRequest, Query};
use crate::error::Result;
use crate::http::HttpClientConfig;
use crate::response::Page;

pub mod types;

use types::{
    Clan, ClanMember, ClanRanking, ClanVersusRanking, ClanWar, ClanWarLeagueGroup, ClanWarLogEntry,
    GoldPassSeason, Label, League, LeagueSeason, Location, Player, PlayerRanking,
    PlayerVersusRanking, VerifyTokenResponse, WarLeague,
};


/// Production API host.
pub const BASE_URL: &str = "https://api.clashofclans.com";

/// API version segment.
pub const VERSION: &str = "v1";

/// Search criteria for [`ClashOfClansApi::search_clans`].
///
/// The vendor requires at least one criterion, and a name criterion of at
/// least three characters. Unset criteria are omitted from the request.
#[derive(Debug, Clone, Default)]
pub struct ClanSearch {
    name: Option<String>,
    war_frequency: Option<String>,
    location_id: Option<i64>,
    min_members: Option<u32>,
    max_members: Option<u32>,
    min_clan_points: Option<u32>,
    min_clan_level: Option<u32>,
    label_ids: Option<String>,
    page: PageRequest,
}

impl ClanSearch {
    /// Create an empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by clan name (at least three characters).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by war frequency.
    #[must_use]
    pub fn war_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.war_frequency = Some(frequency.into());
        self
    }

    /// Filter by location identifier.
    #[must_use]
    pub fn location_id(mut self, id: i64) -> Self {
        self.location_id = Some(id);
        self
    }

    /// Minimum member count.
    #[must_use]
    pub fn min_members(mut self, count: u32) -> Self {
        self.min_members = Some(count);
        self
    }

    /// Maximum member count.
    #[must_use]
    pub fn max_members(mut self, count: u32) -> Self {
        self.max_members = Some(count);
        self
    }

    /// Minimum clan points.
    #[must_use]
    pub fn min_clan_points(mut self, points: u32) -> Self {
        self.min_clan_points = Some(points);
        self
    }

    /// Minimum clan level.
    #[must_use]
    pub fn min_clan_level(mut self, level: u32) -> Self {
        self.min_clan_level = Some(level);
        self
    }

    /// Comma-separated label identifiers.
    #[must_use]
    pub fn label_ids(mut self, ids: impl Into<String>) -> Self {
        self.label_ids = Some(ids.into());
        self
    }

    /// Pagination parameters.
    #[must_use]
    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    fn into_query(self) -> Query {
        let mut query = Query::new();
        query.push_opt("name", self.name);
        query.push_opt("warFrequency", self.war_frequency);
        query.push_opt("locationId", self.location_id);
        query.push_opt("minMembers", self.min_members);
        query.push_opt("maxMembers", self.max_members);
        query.push_opt("minClanPoints", self.min_clan_points);
        query.push_opt("minClanLevel", self.min_clan_level);
        self.page.apply(&mut query);
        query.push_opt("labelIds", self.label_ids);
        query
    }
}

/// Client for the Clash of Clans API.
#[derive(Debug)]
pub struct ClashOfClansApi {
    client: ApiClient,
}

impl ClashOfClansApi {
    /// Build a client authenticating with `token`.
    pub fn new(token: &str) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(BASE_URL, VERSION, token)?,
        })
    }

    /// Build a client with custom transport configuration.
    pub fn with_config(token: &str, config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            client: ApiClient::with_config(BASE_URL, VERSION, token, config)?,
        })
    }

    /// Build a client against a different host, e.g. a mock server.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(base_url, VERSION, token)?,
        })
    }

    /// The underlying [`ApiClient`], for raw requests.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Information about a clan's current clan war league group.
    pub async fn get_clan_war_league_group(&self, clan_tag: &str) -> Result<ClanWarLeagueGroup> {
        self.client
            .fetch_object(&["clans", clan_tag, "currentwar", "leaguegroup"])
            .await
    }

    /// An individual clan war league war.
    pub async fn get_clan_war_league_war(&self, war_tag: &str) -> Result<ClanWar> {
        self.client
            .fetch_object(&["clanwarleagues", "wars", war_tag])
            .await
    }

    /// A clan's war log.
    pub async fn get_clan_war_log(
        &self,
        clan_tag: &str,
        page: PageRequest,
    ) -> Result<Page<ClanWarLogEntry>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client
            .fetch_page(&["clans", clan_tag, "warlog"], &query)
            .await
    }

    /// Search clans by name and/or filter criteria.
    pub async fn search_clans(&self, search: ClanSearch) -> Result<Page<Clan>> {
        self.client.fetch_page(&["clans"], &search.into_query()).await
    }

    /// A clan's current clan war.
    pub async fn get_current_war(&self, clan_tag: &str) -> Result<ClanWar> {
        self.client
            .fetch_object(&["clans", clan_tag, "currentwar"])
            .await
    }

    /// A single clan by tag.
    pub async fn get_clan(&self, clan_tag: &str) -> Result<Clan> {
        self.client.fetch_object(&["clans", clan_tag]).await
    }

    /// Members of a clan.
    pub async fn get_clan_members(
        &self,
        clan_tag: &str,
        page: PageRequest,
    ) -> Result<Page<ClanMember>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client
            .fetch_page(&["clans", clan_tag, "members"], &query)
            .await
    }

    /// A single player by tag.
    pub async fn get_player(&self, player_tag: &str) -> Result<Player> {
        self.client.fetch_object(&["players", player_tag]).await
    }

    /// Verify a player API token issued in-game.
    pub async fn verify_player_token(
        &self,
        player_tag: &str,
        token: &str,
    ) -> Result<VerifyTokenResponse> {
        self.client
            .post_object(
                &["players", player_tag, "verifytoken"],
                json!({ "token": token }),
            )
            .await
    }

    /// All leagues.
    pub async fn get_leagues(&self, page: PageRequest) -> Result<Page<League>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client.fetch_page(&["leagues"], &query).await
    }

    /// A single league.
    pub async fn get_league(&self, league_id: i64) -> Result<League> {
        self.client
            .fetch_object(&["leagues", &league_id.to_string()])
            .await
    }

    /// Seasons of a league. Only available for the Legend League.
    pub async fn get_league_seasons(
        &self,
        league_id: i64,
        page: PageRequest,
    ) -> Result<Page<LeagueSeason>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client
            .fetch_page(&["leagues", &league_id.to_string(), "seasons"], &query)
            .await
    }

    /// Player rankings for a league season.
    pub async fn get_league_season_rankings(
        &self,
        league_id: i64,
        season_id: &str,
        page: PageRequest,
    ) -> Result<Page<PlayerRanking>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client
            .fetch_page(
                &["leagues", &league_id.to_string(), "seasons", season_id],
                &query,
            )
            .await
    }

    /// All war leagues.
    pub async fn get_war_leagues(&self, page: PageRequest) -> Result<Page<WarLeague>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client.fetch_page(&["warleagues"], &query).await
    }

    /// A single war league.
    pub async fn get_war_league(&self, league_id: i64) -> Result<WarLeague> {
        self.client
            .fetch_object(&["warleagues", &league_id.to_string()])
            .await
    }

    /// All locations.
    pub async fn get_locations(&self, page: PageRequest) -> Result<Page<Location>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client.fetch_page(&["locations"], &query).await
    }

    /// A single location.
    pub async fn get_location(&self, location_id: i64) -> Result<Location> {
        self.client
            .fetch_object(&["locations", &location_id.to_string()])
            .await
    }

    /// Clan rankings for a location.
    pub async fn get_clan_rankings(
        &self,
        location_id: i64,
        page: PageRequest,
    ) -> Result<Page<ClanRanking>> {
        self.location_rankings(location_id, "clans", page).await
    }

    /// Player rankings for a location.
    pub async fn get_player_rankings(
        &self,
        location_id: i64,
        page: PageRequest,
    ) -> Result<Page<PlayerRanking>> {
        self.location_rankings(location_id, "players", page).await
    }

    /// Clan versus rankings for a location.
    pub async fn get_clan_versus_rankings(
        &self,
        location_id: i64,
        page: PageRequest,
    ) -> Result<Page<ClanVersusRanking>> {
        self.location_rankings(location_id, "clans-versus", page)
            .await
    }

    /// Player versus rankings for a location.
    pub async fn get_player_versus_rankings(
        &self,
        location_id: i64,
        page: PageRequest,
    ) -> Result<Page<PlayerVersusRanking>> {
        self.location_rankings(location_id, "players-versus", page)
            .await
    }

    /// The current gold pass season.
    pub async fn get_goldpass_season(&self) -> Result<GoldPassSeason> {
        self.client
            .fetch_object(&["goldpass", "seasons", "current"])
            .await
    }

    /// Labels usable on clans.
    pub async fn get_clan_labels(&self, page: PageRequest) -> Result<Page<Label>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client.fetch_page(&["labels", "clans"], &query).await
    }

    /// Labels usable on players.
    pub async fn get_player_labels(&self, page: PageRequest) -> Result<Page<Label>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client.fetch_page(&["labels", "players"], &query).await
    }

    async fn location_rankings<T: crate::response::Entity>(
        &self,
        location_id: i64,
        kind: &str,
        page: PageRequest,
    ) -> Result<Page<T>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client
            .fetch_page(
                &["locations", &location_id.to_string(), "rankings", kind],
                &query,
            )
            .await
    }
}
