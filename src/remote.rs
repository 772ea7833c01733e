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

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::Utc;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::{
    auth::Owner,
    error::Error,
    round::Round,
    tournament::{RoundFields, Tournament, TournamentFields},
    utils::generate_id,
};

pub const ARCHIVE_FILE: &str = "archive.ron";

/// Durable storage of finished tournaments, scoped to an owner.
///
/// A tournament that belongs to somebody else is reported as
/// [`Error::NotFound`], the same as one that doesn't exist.
pub trait RemoteStorage {
    /// Newest first, each with its rounds.
    ///
    /// # Errors
    ///
    /// If the storage can't be reached.
    fn list_tournaments(&self, owner: &Owner) -> Result<Vec<Tournament>, Error>;

    /// # Errors
    ///
    /// If there is no such tournament for the owner.
    fn get_tournament(&self, owner: &Owner, id: &str) -> Result<Tournament, Error>;

    /// Assigns a new id, new round ids, and numbers the rounds 1..N in the
    /// order they were submitted.
    ///
    /// # Errors
    ///
    /// If the storage can't be written.
    fn create_tournament(
        &mut self,
        owner: &Owner,
        fields: TournamentFields,
    ) -> Result<Tournament, Error>;

    /// Replaces every field and recreates every round.
    ///
    /// # Errors
    ///
    /// If there is no such tournament for the owner or the storage can't be
    /// written.
    fn replace_tournament(
        &mut self,
        owner: &Owner,
        id: &str,
        fields: TournamentFields,
    ) -> Result<Tournament, Error>;

    /// # Errors
    ///
    /// If there is no such tournament for the owner or the storage can't be
    /// written.
    fn delete_tournament(&mut self, owner: &Owner, id: &str) -> Result<(), Error>;
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct Record {
    owner: Owner,
    tournament: Tournament,
}

/// Remote storage kept in this process, optionally backed by a RON file.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Archive {
    records: Vec<Record>,
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl Archive {
    /// Loads the archive from `file`, or starts an empty one if the file
    /// doesn't exist yet. Every change is written back to `file`.
    ///
    /// # Errors
    ///
    /// If the file can't be read or isn't valid RON.
    pub fn load(file: &Path) -> anyhow::Result<Self> {
        let mut archive: Self = match fs::read_to_string(file) {
            Ok(string) => match ron::from_str(string.as_str()) {
                Ok(archive) => archive,
                Err(err) => {
                    return Err(anyhow::Error::msg(format!(
                        "RON: {}: {err}",
                        file.display(),
                    )));
                }
            },
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    debug!("{} not found, starting an empty archive", file.display());
                    Self::default()
                }
                _ => return Err(anyhow::Error::msg(err.to_string())),
            },
        };

        archive.file = Some(file.to_path_buf());
        Ok(archive)
    }

    fn save(&self) -> Result<(), Error> {
        let Some(file) = &self.file else {
            return Ok(());
        };

        let string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|error| Error::RemoteCommit(format!("RON: {error}")))?;

        fs::write(file, string).map_err(|error| {
            error!("save archive: {error}");
            Error::RemoteCommit(format!("{}: {error}", file.display()))
        })
    }

    /// Applies `change`, then writes the archive. If writing fails the change
    /// is undone.
    fn change<T>(
        &mut self,
        change: impl FnOnce(&mut Vec<Record>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let previous = self.records.clone();
        let value = change(&mut self.records)?;

        if let Err(error) = self.save() {
            self.records = previous;
            return Err(error);
        }

        Ok(value)
    }

    fn position(records: &[Record], owner: &Owner, id: &str) -> Result<usize, Error> {
        records
            .iter()
            .position(|record| record.owner == *owner && record.tournament.id == id)
            .ok_or_else(|| Error::not_found(format!("tournament '{id}'")))
    }
}

fn rounds_from_fields(rounds: Vec<RoundFields>) -> Vec<Round> {
    (1..)
        .zip(rounds)
        .map(|(round_number, round)| round.into_round(generate_id(), round_number))
        .collect()
}

impl RemoteStorage for Archive {
    fn list_tournaments(&self, owner: &Owner) -> Result<Vec<Tournament>, Error> {
        let mut tournaments: Vec<_> = self
            .records
            .iter()
            .rev()
            .filter(|record| record.owner == *owner)
            .map(|record| record.tournament.clone())
            .collect();

        tournaments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tournaments)
    }

    fn get_tournament(&self, owner: &Owner, id: &str) -> Result<Tournament, Error> {
        let index = Self::position(&self.records, owner, id)?;
        Ok(self.records[index].tournament.clone())
    }

    fn create_tournament(
        &mut self,
        owner: &Owner,
        fields: TournamentFields,
    ) -> Result<Tournament, Error> {
        let now = Utc::now();
        let tournament = Tournament {
            id: generate_id(),
            title: fields.title,
            format: fields.format,
            player_leader_id: fields.player_leader_id,
            date: fields.date,
            player_count: fields.player_count,
            placing: fields.placing,
            rounds: rounds_from_fields(fields.rounds),
            created_at: now,
            updated_at: now,
            saved_at: Some(now),
        };

        let tournament = self.change(|records| {
            records.push(Record {
                owner: owner.clone(),
                tournament: tournament.clone(),
            });
            Ok(tournament)
        })?;

        info!("{owner} created tournament {}", tournament.id);
        Ok(tournament)
    }

    fn replace_tournament(
        &mut self,
        owner: &Owner,
        id: &str,
        fields: TournamentFields,
    ) -> Result<Tournament, Error> {
        let tournament = self.change(|records| {
            let index = Self::position(records, owner, id)?;
            let now = Utc::now();
            let tournament = &mut records[index].tournament;

            tournament.title = fields.title;
            tournament.format = fields.format;
            tournament.player_leader_id = fields.player_leader_id;
            tournament.date = fields.date;
            tournament.player_count = fields.player_count;
            tournament.placing = fields.placing;
            tournament.rounds = rounds_from_fields(fields.rounds);
            tournament.updated_at = now;
            tournament.saved_at = Some(now);

            Ok(tournament.clone())
        })?;

        info!("{owner} replaced tournament {id}");
        Ok(tournament)
    }

    fn delete_tournament(&mut self, owner: &Owner, id: &str) -> Result<(), Error> {
        self.change(|records| {
            let index = Self::position(records, owner, id)?;
            records.remove(index);
            Ok(())
        })?;

        info!("{owner} deleted tournament {id}");
        Ok(())
    }
}
