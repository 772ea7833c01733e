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

/// The outcome of a best of three, from the player's side.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub enum MatchResult {
    TwoZero,
    TwoOne,
    OneTwo,
    ZeroTwo,
    Draw,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Game {
    Win,
    Loss,
}

impl MatchResult {
    pub const ALL: [Self; 5] = [
        Self::TwoZero,
        Self::TwoOne,
        Self::OneTwo,
        Self::ZeroTwo,
        Self::Draw,
    ];

    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, Self::TwoZero | Self::TwoOne)
    }

    #[must_use]
    pub fn is_loss(self) -> bool {
        matches!(self, Self::OneTwo | Self::ZeroTwo)
    }

    #[must_use]
    pub fn is_draw(self) -> bool {
        self == Self::Draw
    }

    /// Games won and games lost.
    #[must_use]
    pub fn score(self) -> (u8, u8) {
        match self {
            Self::TwoZero => (2, 0),
            Self::TwoOne => (2, 1),
            Self::OneTwo => (1, 2),
            Self::ZeroTwo => (0, 2),
            Self::Draw => (0, 0),
        }
    }

    /// The individual games, wins first. A draw has no games.
    #[must_use]
    pub fn games(self) -> Vec<Game> {
        let (won, lost) = self.score();
        let mut games = vec![Game::Win; usize::from(won)];
        games.extend(vec![Game::Loss; usize::from(lost)]);
        games
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoZero => "W 2-0",
            Self::TwoOne => "W 2-1",
            Self::OneTwo => "L 1-2",
            Self::ZeroTwo => "L 0-2",
            Self::Draw => "D",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoZero => write!(f, "2-0"),
            Self::TwoOne => write!(f, "2-1"),
            Self::OneTwo => write!(f, "1-2"),
            Self::ZeroTwo => write!(f, "0-2"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

impl FromStr for MatchResult {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string.to_lowercase().as_str() {
            "2-0" => Ok(Self::TwoZero),
            "2-1" => Ok(Self::TwoOne),
            "1-2" => Ok(Self::OneTwo),
            "0-2" => Ok(Self::ZeroTwo),
            "draw" | "d" => Ok(Self::Draw),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a MatchResult!"
            ))),
        }
    }
}

impl From<MatchResult> for String {
    fn from(result: MatchResult) -> Self {
        result.to_string()
    }
}

impl TryFrom<String> for MatchResult {
    type Error = anyhow::Error;

    fn try_from(string: String) -> anyhow::Result<Self> {
        string.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_result_is_exactly_one_outcome() {
        for result in MatchResult::ALL {
            let outcomes = [result.is_win(), result.is_loss(), result.is_draw()];
            assert_eq!(outcomes.iter().filter(|outcome| **outcome).count(), 1);
        }
    }

    #[test]
    fn games_put_wins_first() {
        assert_eq!(
            MatchResult::TwoOne.games(),
            [Game::Win, Game::Win, Game::Loss]
        );
        assert_eq!(MatchResult::ZeroTwo.games(), [Game::Loss, Game::Loss]);
        assert!(MatchResult::Draw.games().is_empty());
    }

    #[test]
    fn parses_what_it_prints() -> anyhow::Result<()> {
        for result in MatchResult::ALL {
            assert_eq!(result.to_string().parse::<MatchResult>()?, result);
        }
        assert!("3-0".parse::<MatchResult>().is_err());
        Ok(())
    }
}
