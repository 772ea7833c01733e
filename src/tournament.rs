// This file is part of riftrecord.
//
// riftrecord is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// riftrecord is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    Id,
    format::TournamentFormat,
    leader::{self, Leader},
    match_result::MatchResult,
    round::{EliminationStage, Round, RoundType},
    stats::{self, FullStats},
};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Tournament {
    pub id: Id,
    pub title: String,
    pub format: TournamentFormat,
    pub player_leader_id: String,
    /// The day the event was played.
    pub date: NaiveDate,
    #[serde(default)]
    pub player_count: Option<u32>,
    #[serde(default)]
    pub placing: Option<u32>,
    /// In the order they were entered.
    #[serde(default)]
    pub rounds: Vec<Round>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set once the tournament has been committed to remote storage.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Tournament {
    #[must_use]
    pub fn leader(&self) -> Option<&'static Leader> {
        leader::leader_by_id(&self.player_leader_id)
    }

    pub fn rounds_of(&self, round_type: RoundType) -> impl Iterator<Item = &Round> {
        self.rounds
            .iter()
            .filter(move |round| round.round_type == round_type)
    }

    #[must_use]
    pub fn round(&self, id: &str) -> Option<&Round> {
        self.rounds.iter().find(|round| round.id == id)
    }

    pub fn round_mut(&mut self, id: &str) -> Option<&mut Round> {
        self.rounds.iter_mut().find(|round| round.id == id)
    }

    #[must_use]
    pub fn stats(&self) -> FullStats {
        stats::compute_full_stats(&self.rounds)
    }

    /// What gets sent to remote storage.
    #[must_use]
    pub fn fields(&self) -> TournamentFields {
        TournamentFields {
            title: self.title.clone(),
            format: self.format,
            player_leader_id: self.player_leader_id.clone(),
            date: self.date,
            player_count: self.player_count,
            placing: self.placing,
            rounds: self.rounds.iter().map(RoundFields::from).collect(),
        }
    }
}

/// A partial update of the top level fields. `None` leaves a field alone;
/// for the optional fields `Some(None)` clears it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TournamentPatch {
    pub title: Option<String>,
    pub format: Option<TournamentFormat>,
    pub player_leader_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub player_count: Option<Option<u32>>,
    pub placing: Option<Option<u32>>,
    pub saved_at: Option<Option<DateTime<Utc>>>,
}

impl TournamentPatch {
    #[must_use]
    pub fn saved(at: DateTime<Utc>) -> Self {
        Self {
            saved_at: Some(Some(at)),
            ..Self::default()
        }
    }

    pub fn apply(self, tournament: &mut Tournament) {
        if let Some(title) = self.title {
            tournament.title = title;
        }
        if let Some(format) = self.format {
            tournament.format = format;
        }
        if let Some(player_leader_id) = self.player_leader_id {
            tournament.player_leader_id = player_leader_id;
        }
        if let Some(date) = self.date {
            tournament.date = date;
        }
        if let Some(player_count) = self.player_count {
            tournament.player_count = player_count;
        }
        if let Some(placing) = self.placing {
            tournament.placing = placing;
        }
        if let Some(saved_at) = self.saved_at {
            tournament.saved_at = saved_at;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TournamentFields {
    pub title: String,
    pub format: TournamentFormat,
    pub player_leader_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub player_count: Option<u32>,
    #[serde(default)]
    pub placing: Option<u32>,
    #[serde(default)]
    pub rounds: Vec<RoundFields>,
}

/// A round without its id or number; remote storage assigns both.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoundFields {
    pub round_type: RoundType,
    pub opponent_leader_id: String,
    #[serde(default)]
    pub opponent_name: Option<String>,
    pub result: MatchResult,
    #[serde(default)]
    pub dice_won: Option<bool>,
    #[serde(default)]
    pub elimination_stage: Option<EliminationStage>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<&Round> for RoundFields {
    fn from(round: &Round) -> Self {
        Self {
            round_type: round.round_type,
            opponent_leader_id: round.opponent_leader_id.clone(),
            opponent_name: round.opponent_name.clone(),
            result: round.result,
            dice_won: round.dice_won,
            elimination_stage: round.elimination_stage,
            notes: round.notes.clone(),
        }
    }
}

impl RoundFields {
    #[must_use]
    pub fn into_round(self, id: Id, round_number: u32) -> Round {
        Round {
            id,
            round_number,
            round_type: self.round_type,
            opponent_leader_id: self.opponent_leader_id,
            opponent_name: self.opponent_name,
            result: self.result,
            dice_won: self.dice_won,
            elimination_stage: self.elimination_stage,
            notes: self.notes,
        }
    }
}
