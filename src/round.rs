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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Id, error::Error, leader, match_result::MatchResult};

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum RoundType {
    #[default]
    #[serde(rename = "swiss")]
    Qualifying,
    #[serde(rename = "topcut")]
    Elimination,
}

impl fmt::Display for RoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qualifying => write!(f, "swiss"),
            Self::Elimination => write!(f, "topcut"),
        }
    }
}

impl FromStr for RoundType {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string.to_lowercase().as_str() {
            "swiss" | "qualifying" => Ok(Self::Qualifying),
            "topcut" | "top-cut" | "elimination" => Ok(Self::Elimination),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a RoundType!"
            ))),
        }
    }
}

/// How far into the top cut a round was played, largest bracket first.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EliminationStage {
    Top64,
    Top32,
    Top16,
    Top8,
    Top4,
    Finals,
}

impl EliminationStage {
    pub const LADDER: [Self; 6] = [
        Self::Top64,
        Self::Top32,
        Self::Top16,
        Self::Top8,
        Self::Top4,
        Self::Finals,
    ];

    /// Players left in the bracket when the round starts.
    #[must_use]
    pub fn players(self) -> u32 {
        match self {
            Self::Top64 => 64,
            Self::Top32 => 32,
            Self::Top16 => 16,
            Self::Top8 => 8,
            Self::Top4 => 4,
            Self::Finals => 2,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Top64 => "Top 64",
            Self::Top32 => "Top 32",
            Self::Top16 => "Top 16",
            Self::Top8 => "Top 8",
            Self::Top4 => "Top 4",
            Self::Finals => "Finals",
        }
    }

    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Top64 => "T64",
            Self::Top32 => "T32",
            Self::Top16 => "T16",
            Self::Top8 => "T8",
            Self::Top4 => "T4",
            Self::Finals => "F",
        }
    }
}

impl fmt::Display for EliminationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top64 => write!(f, "top64"),
            Self::Top32 => write!(f, "top32"),
            Self::Top16 => write!(f, "top16"),
            Self::Top8 => write!(f, "top8"),
            Self::Top4 => write!(f, "top4"),
            Self::Finals => write!(f, "finals"),
        }
    }
}

impl FromStr for EliminationStage {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string.to_lowercase().as_str() {
            "top64" | "t64" => Ok(Self::Top64),
            "top32" | "t32" => Ok(Self::Top32),
            "top16" | "t16" => Ok(Self::Top16),
            "top8" | "t8" => Ok(Self::Top8),
            "top4" | "t4" | "semifinals" => Ok(Self::Top4),
            "finals" | "final" | "f" => Ok(Self::Finals),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to an EliminationStage!"
            ))),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Round {
    pub id: Id,
    /// 1-based position among the rounds of the same type.
    pub round_number: u32,
    pub round_type: RoundType,
    pub opponent_leader_id: String,
    #[serde(default)]
    pub opponent_name: Option<String>,
    pub result: MatchResult,
    #[serde(default)]
    pub dice_won: Option<bool>,
    /// Set if and only if `round_type` is `Elimination`.
    #[serde(default)]
    pub elimination_stage: Option<EliminationStage>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Round {
    /// `R3` for the third swiss round, `T8` for a top eight round.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.round_type, self.elimination_stage) {
            (RoundType::Elimination, Some(stage)) => stage.short_label().to_string(),
            (RoundType::Elimination, None) => format!("T{}", self.round_number),
            (RoundType::Qualifying, _) => format!("R{}", self.round_number),
        }
    }
}

/// What the player fills in when a round finishes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NewRound {
    pub opponent_leader_id: String,
    pub opponent_name: Option<String>,
    pub result: Option<MatchResult>,
    pub round_type: RoundType,
    pub elimination_stage: Option<EliminationStage>,
    pub dice_won: Option<bool>,
    pub notes: Option<String>,
}

impl NewRound {
    #[must_use]
    pub fn new(opponent_leader_id: &str, result: MatchResult, round_type: RoundType) -> Self {
        Self {
            opponent_leader_id: opponent_leader_id.to_string(),
            result: Some(result),
            round_type,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// If the opponent's leader is unknown, the result is missing, or the
    /// elimination stage is present for a swiss round or missing for a top
    /// cut round.
    pub fn validate(&self) -> Result<MatchResult, Error> {
        if leader::leader_by_id(&self.opponent_leader_id).is_none() {
            return Err(Error::invalid(format!(
                "unknown opponent leader '{}'",
                self.opponent_leader_id
            )));
        }

        let Some(result) = self.result else {
            return Err(Error::invalid("the round needs a result"));
        };

        match (self.round_type, self.elimination_stage) {
            (RoundType::Elimination, None) => Err(Error::invalid(
                "an elimination round needs an elimination stage",
            )),
            (RoundType::Qualifying, Some(stage)) => Err(Error::invalid(format!(
                "a qualifying round can't have the elimination stage '{stage}'"
            ))),
            _ => Ok(result),
        }
    }
}

/// A partial update of a round. `None` leaves a field alone; for the
/// optional fields `Some(None)` clears it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RoundPatch {
    pub round_type: Option<RoundType>,
    pub opponent_leader_id: Option<String>,
    pub opponent_name: Option<Option<String>>,
    pub result: Option<MatchResult>,
    pub dice_won: Option<Option<bool>>,
    pub elimination_stage: Option<Option<EliminationStage>>,
    pub notes: Option<Option<String>>,
}

impl RoundPatch {
    /// Shallow merge. Nothing is renumbered or re-validated.
    pub fn apply(self, round: &mut Round) {
        if let Some(round_type) = self.round_type {
            round.round_type = round_type;
        }
        if let Some(opponent_leader_id) = self.opponent_leader_id {
            round.opponent_leader_id = opponent_leader_id;
        }
        if let Some(opponent_name) = self.opponent_name {
            round.opponent_name = opponent_name;
        }
        if let Some(result) = self.result {
            round.result = result;
        }
        if let Some(dice_won) = self.dice_won {
            round.dice_won = dice_won;
        }
        if let Some(elimination_stage) = self.elimination_stage {
            round.elimination_stage = elimination_stage;
        }
        if let Some(notes) = self.notes {
            round.notes = notes;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The number the next round of `round_type` gets.
#[must_use]
pub fn next_round_number(rounds: &[Round], round_type: RoundType) -> u32 {
    let same_type = rounds
        .iter()
        .filter(|round| round.round_type == round_type)
        .count();

    u32::try_from(same_type).unwrap_or(u32::MAX).saturating_add(1)
}

/// Numbers the rounds of each type 1, 2, 3, ... in the order they appear.
pub fn renumber(rounds: &mut [Round]) {
    let mut qualifying = 0;
    let mut elimination = 0;

    for round in rounds {
        let counter = match round.round_type {
            RoundType::Qualifying => &mut qualifying,
            RoundType::Elimination => &mut elimination,
        };

        *counter += 1;
        round.round_number = *counter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(id: &str, round_type: RoundType, round_number: u32) -> Round {
        Round {
            id: id.to_string(),
            round_number,
            round_type,
            opponent_leader_id: "jinx".to_string(),
            opponent_name: None,
            result: MatchResult::TwoZero,
            dice_won: None,
            elimination_stage: (round_type == RoundType::Elimination)
                .then_some(EliminationStage::Top8),
            notes: None,
        }
    }

    #[test]
    fn renumber_walks_each_type() {
        let mut rounds = vec![
            round("a", RoundType::Qualifying, 1),
            round("c", RoundType::Qualifying, 3),
            round("d", RoundType::Elimination, 2),
            round("e", RoundType::Qualifying, 4),
        ];

        renumber(&mut rounds);

        let numbers: Vec<_> = rounds.iter().map(|round| round.round_number).collect();
        assert_eq!(numbers, [1, 2, 1, 3]);
    }

    #[test]
    fn next_number_counts_the_same_type() {
        let rounds = vec![
            round("a", RoundType::Qualifying, 1),
            round("b", RoundType::Elimination, 1),
            round("c", RoundType::Qualifying, 2),
        ];

        assert_eq!(next_round_number(&rounds, RoundType::Qualifying), 3);
        assert_eq!(next_round_number(&rounds, RoundType::Elimination), 2);
        assert_eq!(next_round_number(&[], RoundType::Elimination), 1);
    }

    #[test]
    fn elimination_needs_a_stage() {
        let new_round = NewRound::new("ahri", MatchResult::TwoOne, RoundType::Elimination);
        assert!(matches!(
            new_round.validate(),
            Err(Error::InvalidInput(_))
        ));

        let new_round = NewRound {
            elimination_stage: Some(EliminationStage::Finals),
            ..new_round
        };
        assert_eq!(new_round.validate(), Ok(MatchResult::TwoOne));
    }

    #[test]
    fn qualifying_rejects_a_stage() {
        let new_round = NewRound {
            elimination_stage: Some(EliminationStage::Top4),
            ..NewRound::new("ahri", MatchResult::TwoOne, RoundType::Qualifying)
        };
        assert!(new_round.validate().is_err());
    }

    #[test]
    fn unknown_opponents_and_missing_results_are_rejected() {
        let new_round = NewRound::new("garen", MatchResult::Draw, RoundType::Qualifying);
        assert!(new_round.validate().is_err());

        let new_round = NewRound {
            result: None,
            ..NewRound::new("sett", MatchResult::Draw, RoundType::Qualifying)
        };
        assert!(new_round.validate().is_err());
    }

    #[test]
    fn patches_merge_shallowly() {
        let mut round = round("a", RoundType::Qualifying, 1);
        round.notes = Some("mulliganed".to_string());

        RoundPatch {
            result: Some(MatchResult::OneTwo),
            dice_won: Some(Some(true)),
            notes: Some(None),
            ..RoundPatch::default()
        }
        .apply(&mut round);

        assert_eq!(round.result, MatchResult::OneTwo);
        assert_eq!(round.dice_won, Some(true));
        assert_eq!(round.notes, None);
        assert_eq!(round.opponent_leader_id, "jinx");
        assert_eq!(round.round_number, 1);
    }

    #[test]
    fn labels() {
        assert_eq!(round("a", RoundType::Qualifying, 3).label(), "R3");
        assert_eq!(round("b", RoundType::Elimination, 1).label(), "T8");
        assert_eq!(EliminationStage::Finals.short_label(), "F");
        assert_eq!(EliminationStage::Top4.players(), 4);
    }

    #[test]
    fn stages_parse() -> anyhow::Result<()> {
        for stage in EliminationStage::LADDER {
            assert_eq!(stage.to_string().parse::<EliminationStage>()?, stage);
        }
        assert_eq!("semifinals".parse::<EliminationStage>()?, EliminationStage::Top4);
        assert_eq!("topcut".parse::<RoundType>()?, RoundType::Elimination);
        Ok(())
    }
}
