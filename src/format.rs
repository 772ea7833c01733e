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

/// Serialized by wire name, e.g. `"1v1-duel"`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub enum TournamentFormat {
    #[default]
    Standard,
    Ffa3,
    Ffa4,
    TwoVersusTwo,
    Duel,
    Match,
}

impl TournamentFormat {
    pub const ALL: [Self; 6] = [
        Self::Standard,
        Self::Ffa3,
        Self::Ffa4,
        Self::TwoVersusTwo,
        Self::Duel,
        Self::Match,
    ];

    /// How the format is shown to people.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard (Constructed)",
            Self::Ffa3 => "FFA3 (Skirmish)",
            Self::Ffa4 => "FFA4 (War)",
            Self::TwoVersusTwo => "2v2 (Magma Chamber)",
            Self::Duel => "1v1 Duel",
            Self::Match => "1v1 Match (Best of Three)",
        }
    }
}

impl fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Ffa3 => write!(f, "ffa3"),
            Self::Ffa4 => write!(f, "ffa4"),
            Self::TwoVersusTwo => write!(f, "2v2"),
            Self::Duel => write!(f, "1v1-duel"),
            Self::Match => write!(f, "1v1-match"),
        }
    }
}

impl FromStr for TournamentFormat {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "ffa3" => Ok(Self::Ffa3),
            "ffa4" => Ok(Self::Ffa4),
            "2v2" => Ok(Self::TwoVersusTwo),
            "1v1-duel" => Ok(Self::Duel),
            "1v1-match" => Ok(Self::Match),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a TournamentFormat!"
            ))),
        }
    }
}

impl From<TournamentFormat> for String {
    fn from(format: TournamentFormat) -> Self {
        format.to_string()
    }
}

impl TryFrom<String> for TournamentFormat {
    type Error = anyhow::Error;

    fn try_from(string: String) -> anyhow::Result<Self> {
        string.parse()
    }
}
