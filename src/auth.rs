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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The signed in user remote records belong to. Where the identifier comes
/// from is up to the caller; all we require is that there is one.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Owner(String);

impl Owner {
    /// # Errors
    ///
    /// If there is no identifier or it is blank.
    pub fn authenticate(identifier: Option<&str>) -> Result<Self, Error> {
        match identifier.map(str::trim) {
            Some(identifier) if !identifier.is_empty() => Ok(Self(identifier.to_string())),
            _ => Err(Error::Unauthorized),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
