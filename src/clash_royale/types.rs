//! Clash Royale entity shapes.

// The shapes mirror the vendor catalog one to one; per-struct docs would
// only restate the struct names.
#![allow(missing_docs)]

use crate::entity;

entity! {
    /// One entry of a clan's war log.
    pub struct ClanWarLogEntry {
        "standings" => object_list(ClanWarStanding),
        "seasonId" => scalar,
        "participants" => object_list(ClanWarParticipant),
        "createdDate" => scalar,
    }
}

entity! {
    pub struct ClanWarStanding {
        "trophyChange" => scalar,
        "clan" => object(ClanWarClan),
    }
}

entity! {
    pub struct ClanWarParticipant {
        "tag" => scalar,
        "name" => scalar,
        "cardsEarned" => scalar,
        "battlesPlayed" => scalar,
        "wins" => scalar,
        "collectionDayBattlesPlayed" => scalar,
        "numberOfBattles" => scalar,
    }
}

entity! {
    pub struct ClanWarClan {
        "crowns" => scalar,
        "tag" => scalar,
        "clanScore" => scalar,
        "badgeId" => scalar,
        "name" => scalar,
        "participants" => scalar,
        "battlesPlayed" => scalar,
        "wins" => scalar,
    }
}

entity! {
    /// A clan profile, as returned by clan lookup and clan search.
    pub struct Clan {
        "memberList" => object_list(ClanMember),
        "tag" => scalar,
        "clanWarTrophies" => scalar,
        "requiredTrophies" => scalar,
        "donationsPerWeek" => scalar,
        "clanScore" => scalar,
        "badgeId" => scalar,
        "clanChestMaxLevel" => scalar,
        "clanChestStatus" => scalar,
        "clanChestLevel" => scalar,
        "name" => scalar,
        "location" => object(Location),
        "type" => scalar,
        "members" => scalar,
        "description" => scalar,
        "clanChestPoints" => scalar,
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
    pub struct ClanMember {
        "clanChestPoints" => scalar,
        "arena" => object(Arena),
        "lastSeen" => scalar,
        "tag" => scalar,
        "name" => scalar,
        "role" => scalar,
        "expLevel" => scalar,
        "trophies" => scalar,
        "clanRank" => scalar,
        "previousClanRank" => scalar,
        "donations" => scalar,
        "donationsReceived" => scalar,
    }
}

entity! {
    pub struct Arena {
        "name" => scalar,
        "id" => scalar,
        "iconUrls" => scalar,
    }
}

entity! {
    pub struct RiverRaceLogEntry {
        "standings" => object_list(RiverRaceStanding),
        "seasonId" => scalar,
        "createdDate" => scalar,
        "sectionIndex" => scalar,
    }
}

entity! {
    pub struct RiverRaceStanding {
        "rank" => scalar,
        "trophyChange" => scalar,
        "clan" => object(RiverRaceClan),
    }
}

entity! {
    pub struct RiverRaceClan {
        "tag" => scalar,
        "clanScore" => scalar,
        "badgeId" => scalar,
        "name" => scalar,
        "fame" => scalar,
        "repairPoints" => scalar,
        "finishTime" => scalar,
        "participants" => object_list(RiverRaceParticipant),
        "periodPoints" => scalar,
    }
}

entity! {
    pub struct RiverRaceParticipant {
        "tag" => scalar,
        "name" => scalar,
        "fame" => scalar,
        "repairPoints" => scalar,
        "boatAttacks" => scalar,
        "decksUsed" => scalar,
        "decksUsedToday" => scalar,
    }
}

entity! {
    /// State of a clan's current clan war.
    pub struct CurrentClanWar {
        "state" => scalar,
        "clan" => object(ClanWarClan),
        "participants" => object_list(ClanWarParticipant),
        "clans" => object_list(ClanWarClan),
        "collectionEndTime" => scalar,
        "warEndTime" => scalar,
    }
}

entity! {
    /// State of a clan's current river race.
    pub struct CurrentRiverRace {
        "state" => scalar,
        "clan" => object(RiverRaceClan),
        "clans" => object_list(RiverRaceClan),
        "collectionEndTime" => scalar,
        "warEndTime" => scalar,
        "sectionIndex" => scalar,
        "periodIndex" => scalar,
        "periodType" => scalar,
        "periodLogs" => object_list(PeriodLog),
    }
}

entity! {
    pub struct PeriodLog {
        "items" => object_list(PeriodLogEntry),
        "periodIndex" => scalar,
    }
}

entity! {
    pub struct PeriodLogEntry {
        "clan" => object(PeriodLogEntryClan),
        "pointsEarned" => scalar,
        "progressStartOfDay" => scalar,
        "progressEndOfDay" => scalar,
        "endOfDayRank" => scalar,
        "progressEarned" => scalar,
        "numOfDefensesRemaining" => scalar,
        "progressEarnedFromDefenses" => scalar,
    }
}

entity! {
    pub struct PeriodLogEntryClan {
        "tag" => scalar,
    }
}

entity! {
    pub struct PlayerBattleData {
        "clan" => object(PlayerClan),
        "cards" => object_list(PlayerItemLevel),
        "tag" => scalar,
        "name" => scalar,
        "startingTrophies" => scalar,
        "trophyChange" => scalar,
        "crowns" => scalar,
        "kingTowerHitPoints" => scalar,
        "princessTowersHitPoints" => scalar_list,
    }
}

entity! {
    pub struct GameMode {
        "id" => scalar,
        "name" => scalar,
    }
}

entity! {
    /// One battle from a player's battle log.
    pub struct Battle {
        "gameMode" => object(GameMode),
        "arena" => object(Arena),
        "type" => scalar,
        "deckSelection" => scalar,
        "opponent" => object_list(PlayerBattleData),
        "challengeWinCountBefore" => scalar,
        "boatBattleSide" => scalar,
        "boatBattleWon" => scalar,
        "newTowersDestroyed" => scalar,
        "prevTowersDestroyed" => scalar,
        "remainingTowers" => scalar,
        "team" => object_list(PlayerBattleData),
        "battleTime" => scalar,
        "challengeId" => scalar,
        "tournamentTag" => scalar,
        "challengeTitle" => scalar,
        "isLadderTournament" => scalar,
        "isHostedMatch" => scalar,
    }
}

entity! {
    pub struct Chest {
        "name" => scalar,
        "index" => scalar,
        "iconUrls" => scalar,
    }
}

entity! {
    pub struct UpcomingChests {
        "items" => object_list(Chest),
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
    }
}

entity! {
    pub struct PlayerAchievementBadge {
        "maxLevel" => scalar,
        "progress" => scalar,
        "level" => scalar,
        "target" => scalar,
        "name" => scalar,
    }
}

entity! {
    pub struct PlayerItemLevel {
        "id" => scalar,
        "count" => scalar,
        "level" => scalar,
        "starLevel" => scalar,
        "name" => scalar,
        "maxLevel" => scalar,
        "iconUrls" => scalar,
    }
}

entity! {
    pub struct LeagueSeasonResult {
        "trophies" => scalar,
        "rank" => scalar,
        "bestTrophies" => scalar,
        "id" => scalar,
    }
}

entity! {
    /// A card.
    pub struct Item {
        "iconUrls" => scalar,
        "name" => scalar,
        "id" => scalar,
        "maxLevel" => scalar,
    }
}

entity! {
    pub struct PlayerLeagueStatistics {
        "bestSeason" => object(LeagueSeasonResult),
        "currentSeason" => object(LeagueSeasonResult),
        "previousSeason" => object(LeagueSeasonResult),
    }
}

entity! {
    pub struct PlayerClan {
        "badgeId" => scalar,
        "tag" => scalar,
        "name" => scalar,
        "badgeUrls" => scalar,
    }
}

entity! {
    /// A full player profile.
    pub struct Player {
        "clan" => object(PlayerClan),
        "arena" => object(Arena),
        "role" => scalar,
        "wins" => scalar,
        "losses" => scalar,
        "totalDonations" => scalar,
        "leagueStatistics" => object(PlayerLeagueStatistics),
        "cards" => object_list(PlayerItemLevel),
        "currentFavouriteCard" => object(Item),
        "badges" => object_list(PlayerAchievementBadge),
        "tag" => scalar,
        "name" => scalar,
        "expLevel" => scalar,
        "trophies" => scalar,
        "bestTrophies" => scalar,
        "donations" => scalar,
        "donationsReceived" => scalar,
        "achievements" => object_list(PlayerAchievementProgress),
        "battleCount" => scalar,
        "threeCrownWins" => scalar,
        "challengeCardsWon" => scalar,
        "challengeMaxWins" => scalar,
        "tournamentCardsWon" => scalar,
        "tournamentBattleCount" => scalar,
        "currentDeck" => object_list(PlayerItemLevel),
        "warDayWins" => scalar,
        "clanCardsCollected" => scalar,
        "starPoints" => scalar,
        "expPoints" => scalar,
    }
}

entity! {
    /// Tournament summary, as returned by tournament search.
    pub struct TournamentHeader {
        "status" => scalar,
        "preparationDuration" => scalar,
        "createdTime" => scalar,
        "firstPlaceCardPrize" => scalar,
        "gameMode" => object(GameMode),
        "duration" => scalar,
        "type" => scalar,
        "tag" => scalar,
        "creatorTag" => scalar,
        "name" => scalar,
        "description" => scalar,
        "capacity" => scalar,
        "maxCapacity" => scalar,
        "levelCap" => scalar,
    }
}

entity! {
    /// Full tournament detail, including its member list.
    pub struct Tournament {
        "membersList" => object_list(TournamentMember),
        "status" => scalar,
        "preparationDuration" => scalar,
        "createdTime" => scalar,
        "startedTime" => scalar,
        "endedTime" => scalar,
        "firstPlaceCardPrize" => scalar,
        "gameMode" => object(GameMode),
        "duration" => scalar,
        "type" => scalar,
        "tag" => scalar,
        "creatorTag" => scalar,
        "name" => scalar,
        "description" => scalar,
        "capacity" => scalar,
        "maxCapacity" => scalar,
        "levelCap" => scalar,
    }
}

entity! {
    pub struct TournamentMember {
        "rank" => scalar,
        "previousRank" => scalar,
        "clan" => object(PlayerClan),
        "tag" => scalar,
        "name" => scalar,
        "score" => scalar,
    }
}

entity! {
    pub struct ClanRanking {
        "clanScore" => scalar,
        "badgeId" => scalar,
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
    pub struct PlayerRanking {
        "clan" => object(PlayerRankingClan),
        "arena" => object(Arena),
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
        "badgeId" => scalar,
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
    pub struct LadderTournamentRanking {
        "clan" => object(PlayerRankingClan),
        "wins" => scalar,
        "losses" => scalar,
        "tag" => scalar,
        "name" => scalar,
        "rank" => scalar,
        "previousRank" => scalar,
    }
}

entity! {
    /// A global tournament.
    pub struct LadderTournament {
        "gameMode" => object(GameMode),
        "maxLosses" => scalar,
        "minExpLevel" => scalar,
        "tournamentLevel" => scalar,
        "milestoneRewards" => object_list(SurvivalMilestoneReward),
        "freeTierRewards" => object_list(SurvivalMilestoneReward),
        "tag" => scalar,
        "title" => scalar,
        "startTime" => scalar,
        "endTime" => scalar,
        "topRankReward" => object_list(SurvivalMilestoneReward),
        "maxTopRewardRank" => scalar,
    }
}

entity! {
    pub struct SurvivalMilestoneReward {
        "chest" => scalar,
        "rarity" => scalar,
        "resource" => scalar,
        "type" => scalar,
        "amount" => scalar,
        "card" => object(Item),
        "wins" => scalar,
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
