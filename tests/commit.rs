use riftrecord::{
    auth::Owner,
    cache::MemoryStore,
    error::Error,
    match_result::MatchResult,
    remote::{Archive, RemoteStorage},
    round::{EliminationStage, NewRound, RoundType},
    session::Session,
    tournament::{Tournament, TournamentFields},
};

fn session() -> anyhow::Result<Session<MemoryStore>> {
    let mut session = Session::new(MemoryStore::default());
    session.create_tournament("Worlds Qualifier", "standard", "darius", None, Some(24))?;

    session.add_round(NewRound::new("ahri", MatchResult::TwoZero, RoundType::Qualifying))?;
    let id = session
        .add_round(NewRound::new("sett", MatchResult::OneTwo, RoundType::Qualifying))?
        .id
        .clone();
    session.add_round(NewRound::new("jinx", MatchResult::TwoOne, RoundType::Qualifying))?;
    session.add_round(NewRound {
        elimination_stage: Some(EliminationStage::Top8),
        ..NewRound::new("ezreal", MatchResult::ZeroTwo, RoundType::Elimination)
    })?;
    session.delete_round(&id)?;

    Ok(session)
}

/// Remote storage that is never reachable.
struct Offline;

impl RemoteStorage for Offline {
    fn list_tournaments(&self, _owner: &Owner) -> Result<Vec<Tournament>, Error> {
        Err(Error::RemoteCommit("offline".to_string()))
    }

    fn get_tournament(&self, _owner: &Owner, _id: &str) -> Result<Tournament, Error> {
        Err(Error::RemoteCommit("offline".to_string()))
    }

    fn create_tournament(
        &mut self,
        _owner: &Owner,
        _fields: TournamentFields,
    ) -> Result<Tournament, Error> {
        Err(Error::RemoteCommit("offline".to_string()))
    }

    fn replace_tournament(
        &mut self,
        _owner: &Owner,
        _id: &str,
        _fields: TournamentFields,
    ) -> Result<Tournament, Error> {
        Err(Error::RemoteCommit("offline".to_string()))
    }

    fn delete_tournament(&mut self, _owner: &Owner, _id: &str) -> Result<(), Error> {
        Err(Error::RemoteCommit("offline".to_string()))
    }
}

#[test]
fn commit_creates_a_record_and_stamps_saved_at() -> anyhow::Result<()> {
    let mut session = session()?;
    let mut archive = Archive::default();

    let saved = session.commit(Some("player-1"), &mut archive)?;

    let tournament = session.tournament().unwrap();
    assert_eq!(tournament.saved_at, saved.saved_at);
    assert_ne!(saved.id, tournament.id);
    assert_eq!(saved.title, tournament.title);
    assert_eq!(saved.rounds.len(), 3);
    assert_eq!(saved.stats(), tournament.stats());

    let numbers: Vec<_> = saved.rounds.iter().map(|round| round.round_number).collect();
    assert_eq!(numbers, [1, 2, 3]);

    let owner = Owner::authenticate(Some("player-1"))?;
    assert_eq!(archive.list_tournaments(&owner)?, [saved]);
    assert!(!session.commit_in_flight());
    Ok(())
}

#[test]
fn commit_needs_an_owner() -> anyhow::Result<()> {
    let mut session = session()?;
    let before = session.tournament().unwrap().clone();
    let mut archive = Archive::default();

    assert_eq!(session.commit(None, &mut archive), Err(Error::Unauthorized));
    assert_eq!(session.tournament(), Some(&before));
    assert!(!session.commit_in_flight());
    Ok(())
}

#[test]
fn commit_needs_a_tournament() {
    let mut session = Session::new(MemoryStore::default());
    let mut archive = Archive::default();

    assert!(matches!(
        session.commit(Some("player-1"), &mut archive),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn a_failed_commit_changes_nothing() -> anyhow::Result<()> {
    let mut session = session()?;
    let before = session.tournament().unwrap().clone();

    let result = session.commit(Some("player-1"), &mut Offline);

    assert!(matches!(result, Err(Error::RemoteCommit(_))));
    assert_eq!(session.tournament(), Some(&before));
    assert!(!session.commit_in_flight());

    let restarted = Session::new(session.into_store());
    assert_eq!(restarted.tournament(), Some(&before));
    Ok(())
}

#[test]
fn one_commit_in_flight_at_a_time() -> anyhow::Result<()> {
    let mut session = session()?;
    let mut archive = Archive::default();

    let ticket = session.begin_commit(Some("player-1"))?;
    assert!(session.commit_in_flight());
    assert!(matches!(
        session.begin_commit(Some("player-1")),
        Err(Error::CommitInFlight)
    ));

    let outcome = archive.create_tournament(&ticket.owner, ticket.fields.clone());
    session.finish_commit(ticket, outcome)?;

    assert!(!session.commit_in_flight());
    assert!(session.tournament().unwrap().saved_at.is_some());
    assert_eq!(
        archive
            .list_tournaments(&Owner::authenticate(Some("player-1"))?)?
            .len(),
        1
    );
    Ok(())
}

#[test]
fn a_reset_during_a_commit_is_not_stamped() -> anyhow::Result<()> {
    let mut session = session()?;
    let mut archive = Archive::default();

    let ticket = session.begin_commit(Some("player-1"))?;
    session.reset_tournament();
    session.create_tournament("Next Week", "standard", "ahri", None, None)?;

    let outcome = archive.create_tournament(&ticket.owner, ticket.fields.clone());
    let saved = session.finish_commit(ticket, outcome)?;

    assert_eq!(saved.title, "Worlds Qualifier");
    assert_eq!(session.tournament().unwrap().saved_at, None);
    Ok(())
}

#[test]
fn committing_twice_makes_two_records() -> anyhow::Result<()> {
    let mut session = session()?;
    let mut archive = Archive::default();

    session.commit(Some("player-1"), &mut archive)?;
    session.commit(Some("player-1"), &mut archive)?;

    let owner = Owner::authenticate(Some("player-1"))?;
    assert_eq!(archive.list_tournaments(&owner)?.len(), 2);
    Ok(())
}
