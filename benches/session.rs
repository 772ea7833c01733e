#[cfg(feature = "bench")]
use std::time::Duration;

#[cfg(feature = "bench")]
use criterion::{Criterion, criterion_group, criterion_main};

#[cfg(feature = "bench")]
use riftrecord::{
    cache::MemoryStore,
    match_result::MatchResult,
    round::{EliminationStage, NewRound, RoundType},
    session::Session,
    stats::compute_full_stats,
};

#[cfg(feature = "bench")]
fn session_with_rounds(rounds: usize) -> Session<MemoryStore> {
    let mut session = Session::new(MemoryStore::default());
    session
        .create_tournament("Bench", "standard", "viktor", None, None)
        .unwrap();

    for index in 0..rounds {
        let new_round = if index % 5 == 4 {
            NewRound {
                elimination_stage: Some(EliminationStage::Top8),
                ..NewRound::new("ahri", MatchResult::TwoOne, RoundType::Elimination)
            }
        } else {
            NewRound::new("sett", MatchResult::ALL[index % 5], RoundType::Qualifying)
        };
        session.add_round(new_round).unwrap();
    }

    session
}

#[cfg(feature = "bench")]
fn add_and_delete(c: &mut Criterion) {
    c.bench_function("add_and_delete_rounds", |b| {
        b.iter(|| {
            let mut session = session_with_rounds(64);
            while let Some(id) = session
                .tournament()
                .and_then(|tournament| tournament.rounds.first())
                .map(|round| round.id.clone())
            {
                session.delete_round(&id).unwrap();
            }
        });
    });
}

#[cfg(feature = "bench")]
fn full_stats(c: &mut Criterion) {
    let session = session_with_rounds(1_000);
    let rounds = session.tournament().unwrap().rounds.clone();

    c.bench_function("compute_full_stats", move |b| {
        b.iter(|| compute_full_stats(&rounds));
    });
}

#[cfg(feature = "bench")]
criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = add_and_delete, full_stats
}

#[cfg(feature = "bench")]
criterion_main!(benches);

#[cfg(not(feature = "bench"))]
fn main() {
    eprintln!("You must enable pass `--features=bench`");
}
