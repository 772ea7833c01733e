//! A match tracker for Riftbound tournaments.
//!
//! A [`session::Session`] holds the one tournament being played right now.
//! Rounds are added as they finish, statistics are derived on read with
//! [`stats::compute_full_stats`], every change is mirrored to a local
//! [`cache::KeyValueStore`], and the finished record can be committed to a
//! [`remote::RemoteStorage`] collaborator such as the file backed
//! [`remote::Archive`].
//!
//! ## Vocabulary
//!
//! * qualifying round - a swiss round, counted toward the overall record
//! * elimination round - a top cut round, tagged with an [`round::EliminationStage`]
//! * leader - the champion a player builds their deck around

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

#![deny(clippy::panic)]

pub mod auth;
pub mod cache;
pub mod card;
pub mod error;
pub mod format;
pub mod leader;
pub mod match_result;
pub mod remote;
pub mod round;
pub mod session;
pub mod stats;
pub mod tournament;
pub mod utils;

/// Opaque identifier of a tournament or a round.
pub type Id = String;

pub const HOME: &str = "riftrecord";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 RiftRecord Developers

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025 RiftRecord Developers
Licensed under the AGPLv3"
);
