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

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Domain {
    Fury,
    Calm,
    Mind,
    Body,
    Order,
    Chaos,
}

impl Domain {
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Fury => 'r',
            Self::Calm => 'g',
            Self::Mind => 'b',
            Self::Body => 'o',
            Self::Order => 'y',
            Self::Chaos => 'p',
        }
    }

    /// The hex color used for gradients.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Fury => "#dc2626",
            Self::Calm => "#22c55e",
            Self::Mind => "#3b82f6",
            Self::Body => "#f97316",
            Self::Order => "#eab308",
            Self::Chaos => "#a855f7",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fury => write!(f, "Fury"),
            Self::Calm => write!(f, "Calm"),
            Self::Mind => write!(f, "Mind"),
            Self::Body => write!(f, "Body"),
            Self::Order => write!(f, "Order"),
            Self::Chaos => write!(f, "Chaos"),
        }
    }
}

impl FromStr for Domain {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string.to_lowercase().as_str() {
            "r" | "fury" => Ok(Self::Fury),
            "g" | "calm" => Ok(Self::Calm),
            "b" | "mind" => Ok(Self::Mind),
            "o" | "body" => Ok(Self::Body),
            "y" | "order" => Ok(Self::Order),
            "p" | "chaos" => Ok(Self::Chaos),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a Domain!"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Leader {
    pub id: &'static str,
    pub display_name: &'static str,
    pub domains: [Domain; 2],
}

impl Leader {
    #[must_use]
    pub fn colors(&self) -> [&'static str; 2] {
        [self.domains[0].color(), self.domains[1].color()]
    }

    #[must_use]
    pub fn gradient(&self, angle: u16) -> String {
        let [primary, secondary] = self.colors();
        format!("linear-gradient({angle}deg, {primary} 0%, {secondary} 100%)")
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{})",
            self.display_name, self.domains[0], self.domains[1]
        )
    }
}

const fn leader(id: &'static str, display_name: &'static str, domains: [Domain; 2]) -> Leader {
    Leader {
        id,
        display_name,
        domains,
    }
}

use Domain::{Body, Calm, Chaos, Fury, Mind, Order};

/// Every leader from the Origins and Spiritforged sets.
pub const LEADERS: [Leader; 24] = [
    // Origins
    leader("ahri", "Ahri", [Calm, Mind]),
    leader("darius", "Darius", [Fury, Order]),
    leader("jinx", "Jinx", [Fury, Chaos]),
    leader("kaisa", "Kai'Sa", [Fury, Mind]),
    leader("leesin", "Lee Sin", [Calm, Body]),
    leader("leona", "Leona", [Calm, Order]),
    leader("missfortune", "Miss Fortune", [Body, Chaos]),
    leader("sett", "Sett", [Body, Order]),
    leader("teemo", "Teemo", [Mind, Chaos]),
    leader("viktor", "Viktor", [Mind, Order]),
    leader("volibear", "Volibear", [Fury, Body]),
    leader("yasuo", "Yasuo", [Calm, Chaos]),
    // Spiritforged
    leader("azir", "Azir", [Calm, Order]),
    leader("draven", "Draven", [Fury, Chaos]),
    leader("ezreal", "Ezreal", [Mind, Chaos]),
    leader("fiora", "Fiora", [Body, Order]),
    leader("irelia", "Irelia", [Calm, Chaos]),
    leader("jax", "Jax", [Calm, Body]),
    leader("lucian", "Lucian", [Fury, Body]),
    leader("ornn", "Ornn", [Calm, Mind]),
    leader("reksai", "Rek'Sai", [Fury, Order]),
    leader("renata", "Renata Glasc", [Mind, Order]),
    leader("rumble", "Rumble", [Fury, Mind]),
    leader("sivir", "Sivir", [Body, Chaos]),
];

#[must_use]
pub fn leader_by_id(id: &str) -> Option<&'static Leader> {
    LEADERS.iter().find(|leader| leader.id == id)
}

/// Finds a leader by how a person would type the name: "Kai'Sa", "lee sin"
/// and "miss-fortune" all work.
#[must_use]
pub fn leader_by_name(name: &str) -> Option<&'static Leader> {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .filter(|ch| !(*ch == '\'' || *ch == '-' || ch.is_whitespace()))
        .collect();

    leader_by_id(&normalized)
}

#[must_use]
pub fn search_leaders(query: &str) -> Vec<&'static Leader> {
    let query = query.to_lowercase();

    LEADERS
        .iter()
        .filter(|leader| {
            leader.display_name.to_lowercase().contains(&query) || leader.id.contains(&query)
        })
        .collect()
}

/// The display name for an id, falling back to the id itself.
#[must_use]
pub fn display_name(id: &str) -> &str {
    leader_by_id(id).map_or(id, |leader| leader.display_name)
}
