//! Clash of Clans entity shapes.
//!
//! JSON keys are the vendor's camelCase, declared exactly as the API
//! returns them. `badgeUrls`/`iconUrls` blocks stay raw since their keys
//! are icon-size variants the vendor changes freely.

// The shapes mirror the vendor catalog one to one; per-struct docs would
// only restate the struct names.
#![allow(missing_docs)]

use crate::entity;

entity! {
    /// Current clan war league group for a clan.
    pub struct ClanWarLeagueGroup {
        "tag" => scalar,
        "state" => scalar,
        "season" => scalar,
        "clans" => object_list(ClanWarLeagueClan),
        "rounds" => object_list(ClanWarLeagueRound),
    }
}

entity! {
    pub struct ClanWarLeagueClan {
        "tag" => scalar,
        "clanLevel" => scalar,
        "name" => scalar,
        "members" => object_list(ClanWarLeagueClanMember),
        "badgeUrls" => scalar,
    }
}

entity! {
    pub struct ClanWarLeagueRound {
        "warTags" => scalar_list,
    }
}

entity! {
    pub struct ClanWarLeagueClanMember {
        "tag" => scalar,
        "townHallLevel" => scalar,
        "name" => scalar,
    }
}

entity! {
    /// One entry of a clan's war log.
    pub struct ClanWarLogEntry {
        "clan" => object(WarClan),
        "teamSize" => scalar,
        "attacksPerMember" => scalar,
        "opponent" => object(WarClan),
        "endTime" => scalar,
        "result" => scalar,
    }
}

entity! {
    pub struct WarClan {
        "destructionPercentage" => scalar,
        "tag" => scalar,
        "name" => scalar,
        "badgeUrls" => scalar,
        "clanLevel" => scalar,
        "attacks" => scalar,
        "stars" => scalar,
        "expEarned" => scalar,
        "members" => object_list(ClanWarMember),
    }
}

entity! {
    pub struct ClanWarMember {
        "tag" => scalar,
        "name" => scalar,
        "mapPosition" => scalar,
        "townhallLevel" => scalar,
        "opponentAttacks" => scalar,
        "bestOpponentAttack" => object(ClanWarAttack),
        "attacks" => object_list(ClanWarAttack),
    }
}

entity! {
    pub struct ClanWarAttack {
        "order" => scalar,
        "attackerTag" => scalar,
        "defenderTag" => scalar,
        "stars" => scalar,
        "destructionPercentage" => scalar,
        "duration" => scalar,
    }
}

entity! {
    /// A clan profile, as returned by clan lookup and clan search.
    pub struct Clan {
        "warLeague" => object(WarLeague),
        "memberList" => object_list(ClanMember),
        "tag" => scalar,
        "requiredVersusTrophies" => scalar,
        "requiredTownhallLevel" => scalar,
        "warLosses" => scalar,
        "clanPoints" => scalar,
        "warFrequency" => scalar,
        "warWinStreak" => scalar,
        "clanLevel" => scalar,
        "warTies" => scalar,
        "warWins" => scalar,
        "clanVersusPoints" => scalar,
        "chatLanguage" => object(Language),
        "isWarLogPublic" => scalar,
        "requiredTrophies" => scalar,
        "labels" => object_list(Label),
        "name" => scalar,
        "location" => object(Location),
        "type" => scalar,
        "members" => scalar,
        "description" => scalar,
        "badgeUrls" => scalar,
    }
}

entity! {
    /// A regular or clan-war-league war.
    pub struct ClanWar {
        "clan" => object(WarClan),
        "teamSize" => scalar,
        "attacksPerMember" => scalar,
        "opponent" => object(WarClan),
        "startTime" => scalar,
        "state" => scalar,
        "endTime" => scalar,
        "preparationStartTime" => scalar,
    }
}

entity! {
    pub struct Language {
        "name" => scalar,
        "id" => scalar,
        "languageCode" => scalar,
    }
}

entity! {
    pub struct ClanMember {
        "league" => object(League),
        "tag" => scalar,
        "name" => scalar,
        "role" => scalar,
        "expLevel" => scalar,
        "clanRank" => scalar,
        "previousClanRank" => scalar,
        "donations" => scalar,
        "donationsReceived" => scalar,
        "trophies" => scalar,
        "versusTrophies" => scalar,
    }
}

entity! {
    pub struct Label {
        "name" => scalar,
        "id" => scalar,
        "iconUrls" => scalar,
    }
}

entity! {
    pub struct League {
        "name" => scalar,
        "id" => scalar,
        "iconUrls" => scalar,
    }
}

entity! {
    pub struct PlayerRanking {
        "league" => object(League),
        "clan" => object(PlayerRankingClan),
        "attackWins" => scalar,
        "defenseWins" => scalar,
        "tag" => scalar,
        "name" => scalar,
        "expLevel" => scalar,
        "rank" => scalar,
        "previousRank" => scalar,
        "trophies" => scalar,
    }
}

entity! {
    pub struct PlayerRankingClan {
        "tag" => scalar,
        "name" => scalar,
        "badgeUrls" => scalar,
    }
}

entity! {
    pub struct LeagueSeason {
        "id" => scalar,
    }
}

entity! {
    pub struct WarLeague {
        "name" => scalar,
        "id" => scalar,
    }
}

entity! {
    pub struct ClanRanking {
        "clanPoints" => scalar,
        "clanLevel" => scalar,
        "location" => object(Location),
        "members" => scalar,
        "tag" => scalar,
        "name" => scalar,
        "rank" => scalar,
        "previousRank" => scalar,
        "badgeUrls" => scalar,
    }
}

entity! {
    pub struct Location {
        "localizedName" => scalar,
        "id" => scalar,
        "name" => scalar,
        "isCountry" => scalar,
        "countryCode" => scalar,
    }
}

entity! {
    pub struct ClanVersusRanking {
        "clanPoints" => scalar,
        "clanVersusPoints" => scalar,
    }
}

entity! {
    pub struct PlayerVersusRanking {
        "clan" => object(PlayerRankingClan),
        "versusBattleWins" => scalar,
        "tag" => scalar,
        "name" => scalar,
        "expLevel" => scalar,
        "rank" => scalar,
        "previousRank" => scalar,
        "versusTrophies" => scalar,
    }
}

entity! {
    /// A full player profile.
    pub struct Player {
        "league" => object(League),
        "clan" => object(PlayerClan),
        "role" => scalar,
        "warPreference" => scalar,
        "attackWins" => scalar,
        "defenseWins" => scalar,
        "townHallLevel" => scalar,
        "townHallWeaponLevel" => scalar,
        "versusBattleWins" => scalar,
        "legendStatistics" => object(PlayerLegendStatistics),
        "troops" => object_list(PlayerItemLevel),
        "heroes" => object_list(PlayerItemLevel),
        "spells" => object_list(PlayerItemLevel),
        "labels" => object_list(Label),
        "tag" => scalar,
        "name" => scalar,
        "expLevel" => scalar,
        "trophies" => scalar,
        "bestTrophies" => scalar,
        "donations" => scalar,
        "donationsReceived" => scalar,
        "builderHallLevel" => scalar,
        "versusTrophies" => scalar,
        "bestVersusTrophies" => scalar,
        "warStars" => scalar,
        "achievements" => object_list(PlayerAchievementProgress),
        "versusBattleWinCount" => scalar,
    }
}

entity! {
    pub struct PlayerClan {
        "tag" => scalar,
        "clanLevel" => scalar,
        "name" => scalar,
        "badgeUrls" => scalar,
    }
}

entity! {
    pub struct PlayerLegendStatistics {
        "legendTrophies" => scalar,
        "previousVersusSeason" => object(LegendLeagueTournamentSeasonResult),
        "previousSeason" => object(LegendLeagueTournamentSeasonResult),
        "bestSeason" => object(LegendLeagueTournamentSeasonResult),
        "currentSeason" => object(LegendLeagueTournamentSeasonResult),
        "bestVersusSeason" => object(LegendLeagueTournamentSeasonResult),
    }
}

entity! {
    pub struct LegendLeagueTournamentSeasonResult {
        "trophies" => scalar,
        "id" => scalar,
        "rank" => scalar,
    }
}

entity! {
    pub struct PlayerItemLevel {
        "level" => scalar,
        "name" => scalar,
        "maxLevel" => scalar,
        "village" => scalar,
        "superTroopIsActive" => scalar,
    }
}

entity! {
    pub struct PlayerAchievementProgress {
        "stars" => scalar,
        "value" => scalar,
        "name" => scalar,
        "target" => scalar,
        "info" => scalar,
        "completionInfo" => scalar,
        "village" => scalar,
    }
}

entity! {
    /// Outcome of a player API-token verification.
    pub struct VerifyTokenResponse {
        "tag" => scalar,
        "token" => scalar,
        "status" => scalar,
    }
}

entity! {
    /// Current gold pass season window.
    pub struct GoldPassSeason {
        "startTime" => scalar,
        "endTime" => scalar,
    }
}
