//! Clash Royale API client.
//!
//! One method per vendor endpoint at `https://api.clashroyale.com/v1`.

use serde_json::json;

use crate::api::{ApiClient, PageRequest, Query};
use crate::error::Result;
use crate::http::HttpClientConfig;
use crate::response::Page;

pub mod types;

use types::{
    Battle, Clan, ClanMember, ClanRanking, ClanWarLogEntry, CurrentClanWar, CurrentRiverRace,
    Item, LadderTournament, LadderTournamentRanking, LeagueSeason, Location, Player,
    PlayerRanking, RiverRaceLogEntry, Tournament, TournamentHeader, UpcomingChests,
    VerifyTokenResponse,
};

#[cfg(test)]
mod tests;

/// Production API host.
pub const BASE_URL: &str = "https://api.clashroyale.com";

/// API version segment.
pub const VERSION: &str = "v1";

/// Search criteria for [`ClashRoyaleApi::search_clans`].
///
/// The vendor requires at least one criterion, and a name criterion of at
/// least three characters. Unset criteria are omitted from the request.
#[derive(Debug, Clone, Default)]
pub struct ClanSearch {
    name: Option<String>,
    location_id: Option<i64>,
    min_members: Option<u32>,
    max_members: Option<u32>,
    min_score: Option<u32>,
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

    /// Minimum clan score.
    #[must_use]
    pub fn min_score(mut self, score: u32) -> Self {
        self.min_score = Some(score);
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
        query.push_opt("locationId", self.location_id);
        query.push_opt("minMembers", self.min_members);
        query.push_opt("maxMembers", self.max_members);
        query.push_opt("minScore", self.min_score);
        self.page.apply(&mut query);
        query
    }
}

/// Client for the Clash Royale API.
#[derive(Debug)]
pub struct ClashRoyaleApi {
    client: ApiClient,
}

impl ClashRoyaleApi {
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

    /// A clan's clan war log.
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

    /// A clan's river race log.
    pub async fn get_river_race_war_log(
        &self,
        clan_tag: &str,
        page: PageRequest,
    ) -> Result<Page<RiverRaceLogEntry>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client
            .fetch_page(&["clans", clan_tag, "riverracelog"], &query)
            .await
    }

    /// A clan's current clan war.
    pub async fn get_current_war(&self, clan_tag: &str) -> Result<CurrentClanWar> {
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

    /// A clan's current river race.
    pub async fn get_current_river_race(&self, clan_tag: &str) -> Result<CurrentRiverRace> {
        self.client
            .fetch_object(&["clans", clan_tag, "currentriverrace"])
            .await
    }

    /// A single player by tag.
    pub async fn get_player(&self, player_tag: &str) -> Result<Player> {
        self.client.fetch_object(&["players", player_tag]).await
    }

    /// Chests a player will receive next.
    pub async fn get_player_upcoming_chests(&self, player_tag: &str) -> Result<UpcomingChests> {
        self.client
            .fetch_object(&["players", player_tag, "upcomingchests"])
            .await
    }

    /// A player's recent battles. The vendor returns a bare JSON array.
    pub async fn get_player_battles(&self, player_tag: &str) -> Result<Vec<Battle>> {
        self.client
            .fetch_list(&["players", player_tag, "battlelog"], &Query::new())
            .await
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

    /// All available cards.
    pub async fn get_cards(&self, page: PageRequest) -> Result<Page<Item>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client.fetch_page(&["cards"], &query).await
    }

    /// Search tournaments by name.
    pub async fn search_tournaments(
        &self,
        name: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<TournamentHeader>> {
        let mut query = Query::new();
        query.push_opt("name", name);
        page.apply(&mut query);
        self.client.fetch_page(&["tournaments"], &query).await
    }

    /// A single tournament by tag.
    pub async fn get_tournament(&self, tournament_tag: &str) -> Result<Tournament> {
        self.client
            .fetch_object(&["tournaments", tournament_tag])
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

    /// Clan war rankings for a location.
    pub async fn get_clan_wars_rankings(
        &self,
        location_id: i64,
        page: PageRequest,
    ) -> Result<Page<ClanRanking>> {
        self.location_rankings(location_id, "clanwars", page).await
    }

    /// A single top-player league season.
    pub async fn get_top_player_league_season(&self, season_id: &str) -> Result<LeagueSeason> {
        self.client
            .fetch_object(&["locations", "global", "seasons", season_id])
            .await
    }

    /// Player rankings for a top-player league season.
    pub async fn get_top_player_league_season_rankings(
        &self,
        season_id: &str,
        page: PageRequest,
    ) -> Result<Page<PlayerRanking>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client
            .fetch_page(
                &["locations", "global", "seasons", season_id, "rankings", "players"],
                &query,
            )
            .await
    }

    /// All top-player league seasons.
    pub async fn list_top_player_league_seasons(
        &self,
        page: PageRequest,
    ) -> Result<Page<LeagueSeason>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client
            .fetch_page(&["locations", "global", "seasons"], &query)
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

    /// Global rankings for a ladder tournament.
    pub async fn get_global_tournament_rankings(
        &self,
        tournament_tag: &str,
        page: PageRequest,
    ) -> Result<Page<LadderTournamentRanking>> {
        let mut query = Query::new();
        page.apply(&mut query);
        self.client
            .fetch_page(
                &["locations", "global", "rankings", "tournaments", tournament_tag],
                &query,
            )
            .await
    }

    /// All ongoing global tournaments. The vendor returns a bare JSON
    /// array.
    pub async fn get_global_tournaments(&self) -> Result<Vec<LadderTournament>> {
        self.client
            .fetch_list(&["globaltournaments"], &Query::new())
            .await
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
