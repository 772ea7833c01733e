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

use chrono::{Local, NaiveDate, Utc};
use log::{debug, error, info, warn};

use crate::{
    Id,
    auth::Owner,
    cache::{self, KeyValueStore},
    error::Error,
    format::TournamentFormat,
    leader,
    remote::RemoteStorage,
    round::{self, NewRound, Round, RoundPatch},
    stats::FullStats,
    tournament::{Tournament, TournamentFields, TournamentPatch},
    utils::generate_id,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SessionState {
    #[default]
    Uninitialized,
    /// Restoring from the local cache.
    Loading,
    /// No tournament in progress.
    Empty,
    Active,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Loading => write!(f, "loading"),
            Self::Empty => write!(f, "empty"),
            Self::Active => write!(f, "active"),
        }
    }
}

/// Proof that a remote commit was started. Hand it back to
/// [`Session::finish_commit`] with what the remote storage answered.
#[must_use]
#[derive(Debug)]
pub struct CommitTicket {
    pub owner: Owner,
    pub tournament_id: Id,
    pub fields: TournamentFields,
}

/// The tournament being played right now, at most one at a time.
///
/// Every change is written to the local cache, so a new session over the
/// same store picks up where the last one left off.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
    state: SessionState,
    tournament: Option<Tournament>,
    commit_in_flight: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Creates the session and restores whatever tournament `store` holds.
    pub fn new(store: S) -> Self {
        let mut session = Self {
            store,
            state: SessionState::Uninitialized,
            tournament: None,
            commit_in_flight: false,
        };

        session.set_state(SessionState::Loading);
        session.tournament = cache::load_tournament(&session.store);

        if let Some(tournament) = &session.tournament {
            info!(
                "restored tournament {} with {} rounds",
                tournament.id,
                tournament.rounds.len()
            );
            session.set_state(SessionState::Active);
        } else {
            session.set_state(SessionState::Empty);
        }

        session
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            SessionState::Uninitialized | SessionState::Loading
        )
    }

    #[must_use]
    pub fn tournament(&self) -> Option<&Tournament> {
        self.tournament.as_ref()
    }

    /// Derived on every call, never stored.
    #[must_use]
    pub fn stats(&self) -> Option<FullStats> {
        self.tournament.as_ref().map(Tournament::stats)
    }

    #[must_use]
    pub fn commit_in_flight(&self) -> bool {
        self.commit_in_flight
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// # Errors
    ///
    /// If a tournament is already in progress, the title is blank, the format
    /// isn't one we know, or the leader isn't in the catalog.
    pub fn create_tournament(
        &mut self,
        title: &str,
        format: &str,
        leader_id: &str,
        date: Option<NaiveDate>,
        player_count: Option<u32>,
    ) -> Result<&Tournament, Error> {
        if let Some(tournament) = &self.tournament {
            return Err(Error::invalid(format!(
                "tournament '{}' is still in progress, reset it first",
                tournament.title
            )));
        }

        let title = title.trim();
        if title.is_empty() {
            return Err(Error::invalid("the tournament needs a title"));
        }

        let format: TournamentFormat = format
            .parse()
            .map_err(|_| Error::invalid(format!("unknown format '{format}'")))?;

        if leader::leader_by_id(leader_id).is_none() {
            return Err(Error::invalid(format!("unknown leader '{leader_id}'")));
        }

        let now = Utc::now();
        let tournament = Tournament {
            id: generate_id(),
            title: title.to_string(),
            format,
            player_leader_id: leader_id.to_string(),
            date: date.unwrap_or_else(|| Local::now().date_naive()),
            player_count,
            placing: None,
            rounds: Vec::new(),
            created_at: now,
            updated_at: now,
            saved_at: None,
        };

        info!("created tournament {} '{}'", tournament.id, tournament.title);
        self.set_state(SessionState::Active);
        let tournament = self.tournament.insert(tournament);
        Self::persist(&mut self.store, tournament);

        Ok(tournament)
    }

    /// # Errors
    ///
    /// If no tournament is in progress.
    pub fn update_tournament(&mut self, patch: TournamentPatch) -> Result<&Tournament, Error> {
        let tournament = Self::active(&mut self.tournament)?;

        patch.apply(tournament);
        tournament.updated_at = Utc::now();
        Self::persist(&mut self.store, tournament);

        Ok(tournament)
    }

    /// Appends a round numbered after the rounds of the same type.
    ///
    /// # Errors
    ///
    /// If no tournament is in progress or the round is invalid, see
    /// [`NewRound::validate`].
    pub fn add_round(&mut self, new_round: NewRound) -> Result<&Round, Error> {
        let tournament = Self::active(&mut self.tournament)?;
        let result = new_round.validate()?;

        let round = Round {
            id: generate_id(),
            round_number: round::next_round_number(&tournament.rounds, new_round.round_type),
            round_type: new_round.round_type,
            opponent_leader_id: new_round.opponent_leader_id,
            opponent_name: new_round.opponent_name,
            result,
            dice_won: new_round.dice_won,
            elimination_stage: new_round.elimination_stage,
            notes: new_round.notes,
        };

        debug!("add round {} {}", round.label(), round.result);
        tournament.rounds.push(round);
        tournament.updated_at = Utc::now();
        Self::persist(&mut self.store, tournament);

        tournament
            .rounds
            .last()
            .ok_or_else(|| Error::not_found("the round just added"))
    }

    /// # Errors
    ///
    /// If no tournament is in progress or it has no round `id`.
    pub fn update_round(&mut self, id: &str, patch: RoundPatch) -> Result<&Round, Error> {
        let tournament = Self::active(&mut self.tournament)?;

        let round = tournament
            .round_mut(id)
            .ok_or_else(|| Error::not_found(format!("round '{id}'")))?;
        patch.apply(round);

        tournament.updated_at = Utc::now();
        Self::persist(&mut self.store, tournament);

        tournament
            .round(id)
            .ok_or_else(|| Error::not_found(format!("round '{id}'")))
    }

    /// Removes the round and renumbers the rounds left.
    ///
    /// # Errors
    ///
    /// If no tournament is in progress or it has no round `id`.
    pub fn delete_round(&mut self, id: &str) -> Result<Round, Error> {
        let tournament = Self::active(&mut self.tournament)?;

        let index = tournament
            .rounds
            .iter()
            .position(|round| round.id == id)
            .ok_or_else(|| Error::not_found(format!("round '{id}'")))?;

        let removed = tournament.rounds.remove(index);
        round::renumber(&mut tournament.rounds);

        debug!("deleted round {} {}", removed.label(), removed.id);
        tournament.updated_at = Utc::now();
        Self::persist(&mut self.store, tournament);

        Ok(removed)
    }

    /// Drops the tournament in progress, here and in the local cache.
    pub fn reset_tournament(&mut self) {
        if let Some(tournament) = self.tournament.take() {
            info!("reset tournament {}", tournament.id);
        }

        if let Err(error) = cache::clear_tournament(&mut self.store) {
            warn!("reset tournament: {error}");
        }

        self.set_state(SessionState::Empty);
    }

    /// Starts committing the tournament in progress to remote storage. Until
    /// [`Session::finish_commit`] is called no other commit can start.
    ///
    /// # Errors
    ///
    /// If no tournament is in progress, there is no signed in owner, or a
    /// commit is already in flight.
    pub fn begin_commit(&mut self, owner: Option<&str>) -> Result<CommitTicket, Error> {
        let tournament = self
            .tournament
            .as_ref()
            .ok_or_else(|| Error::not_found("no tournament in progress"))?;
        let owner = Owner::authenticate(owner)?;

        if self.commit_in_flight {
            return Err(Error::CommitInFlight);
        }
        self.commit_in_flight = true;

        debug!("commit {} for {owner}", tournament.id);
        Ok(CommitTicket {
            owner,
            tournament_id: tournament.id.clone(),
            fields: tournament.fields(),
        })
    }

    /// Ends the commit `ticket` started. On success the tournament, if it is
    /// still the one in progress, is stamped with `saved_at`.
    ///
    /// # Errors
    ///
    /// Whatever error the remote storage answered with.
    pub fn finish_commit(
        &mut self,
        ticket: CommitTicket,
        outcome: Result<Tournament, Error>,
    ) -> Result<Tournament, Error> {
        self.commit_in_flight = false;

        let saved = match outcome {
            Ok(saved) => saved,
            Err(err) => {
                error!("commit {}: {err}", ticket.tournament_id);
                return Err(err);
            }
        };

        let still_active = self
            .tournament
            .as_ref()
            .is_some_and(|tournament| tournament.id == ticket.tournament_id);

        if still_active {
            let saved_at = saved.saved_at.unwrap_or(saved.updated_at);
            self.update_tournament(TournamentPatch::saved(saved_at))?;
        }

        info!(
            "committed {} as {} for {}",
            ticket.tournament_id, saved.id, ticket.owner
        );
        Ok(saved)
    }

    /// [`Session::begin_commit`], create the record, [`Session::finish_commit`].
    ///
    /// # Errors
    ///
    /// See [`Session::begin_commit`] and [`RemoteStorage::create_tournament`].
    pub fn commit<R: RemoteStorage + ?Sized>(
        &mut self,
        owner: Option<&str>,
        remote: &mut R,
    ) -> Result<Tournament, Error> {
        let ticket = self.begin_commit(owner)?;
        let outcome = remote.create_tournament(&ticket.owner, ticket.fields.clone());
        self.finish_commit(ticket, outcome)
    }

    fn active(tournament: &mut Option<Tournament>) -> Result<&mut Tournament, Error> {
        tournament
            .as_mut()
            .ok_or_else(|| Error::not_found("no tournament in progress"))
    }

    fn persist(store: &mut S, tournament: &Tournament) {
        if let Err(error) = cache::save_tournament(store, tournament) {
            warn!("save tournament {}: {error}", tournament.id);
        }
    }

    fn set_state(&mut self, state: SessionState) {
        debug!("session: {} -> {state}", self.state);
        self.state = state;
    }
}
