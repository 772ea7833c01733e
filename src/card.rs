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

use crate::{
    leader,
    round::{Round, RoundType},
    stats::FullStats,
    tournament::Tournament,
};

/// The end of tournament summary, laid out for a screenshot or a terminal.
#[derive(Clone, Debug)]
pub struct ResultCard<'a> {
    pub tournament: &'a Tournament,
    pub stats: FullStats,
}

impl<'a> ResultCard<'a> {
    #[must_use]
    pub fn new(tournament: &'a Tournament) -> Self {
        Self {
            tournament,
            stats: tournament.stats(),
        }
    }

    /// One line for a social post.
    #[must_use]
    pub fn share_text(&self) -> String {
        let leader = leader::display_name(&self.tournament.player_leader_id);
        let mut text = format!(
            "Went {} with {leader} at {}",
            self.stats.overall.record, self.tournament.title
        );

        if let Some(stage) = self.stats.final_stage {
            text.push_str(&format!(", made {}", stage.label()));
        }
        if let (Some(placing), Some(player_count)) =
            (self.tournament.placing, self.tournament.player_count)
        {
            text.push_str(&format!(", placed {placing}/{player_count}"));
        }

        text.push_str(" #Riftbound");
        text
    }
}

fn write_round(f: &mut fmt::Formatter<'_>, round: &Round) -> fmt::Result {
    write!(
        f,
        "  {:<4} vs {:<14} {:<5}",
        round.label(),
        leader::display_name(&round.opponent_leader_id),
        round.result.label()
    )?;

    if let Some(name) = &round.opponent_name {
        write!(f, " ({name})")?;
    }
    match round.dice_won {
        Some(true) => write!(f, " dice: won")?,
        Some(false) => write!(f, " dice: lost")?,
        None => {}
    }

    writeln!(f)
}

impl fmt::Display for ResultCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tournament = self.tournament;

        writeln!(f, "{}", tournament.title)?;
        writeln!(f, "{} | {}", tournament.format.label(), tournament.date)?;
        match tournament.leader() {
            Some(leader) => writeln!(f, "{leader}")?,
            None => writeln!(f, "{}", tournament.player_leader_id)?,
        }
        writeln!(f, "Record: {}", self.stats.overall)?;

        if let Some(placing) = tournament.placing {
            match tournament.player_count {
                Some(player_count) => writeln!(f, "Placed: {placing} of {player_count}")?,
                None => writeln!(f, "Placed: {placing}")?,
            }
        }

        if tournament.rounds_of(RoundType::Qualifying).next().is_some() {
            writeln!(f, "\nSwiss {}", self.stats.qualifying)?;
            for round in tournament.rounds_of(RoundType::Qualifying) {
                write_round(f, round)?;
            }
        }

        if tournament.rounds_of(RoundType::Elimination).next().is_some() {
            writeln!(f, "\nTop Cut {}", self.stats.elimination)?;
            for round in tournament.rounds_of(RoundType::Elimination) {
                write_round(f, round)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use crate::{
        format::TournamentFormat,
        match_result::MatchResult,
        round::EliminationStage,
    };

    use super::*;

    fn round(number: u32, round_type: RoundType, result: MatchResult) -> Round {
        Round {
            id: number.to_string(),
            round_number: number,
            round_type,
            opponent_leader_id: "sett".to_string(),
            opponent_name: None,
            result,
            dice_won: Some(true),
            elimination_stage: (round_type == RoundType::Elimination)
                .then_some(EliminationStage::Top8),
            notes: None,
        }
    }

    fn tournament() -> Tournament {
        let now = Utc::now();

        Tournament {
            id: "t".to_string(),
            title: "Summoner Skirmish".to_string(),
            format: TournamentFormat::Standard,
            player_leader_id: "leona".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
            player_count: Some(40),
            placing: Some(6),
            rounds: vec![
                round(1, RoundType::Qualifying, MatchResult::TwoZero),
                round(2, RoundType::Qualifying, MatchResult::ZeroTwo),
                round(1, RoundType::Elimination, MatchResult::OneTwo),
            ],
            created_at: now,
            updated_at: now,
            saved_at: None,
        }
    }

    #[test]
    fn share_text() {
        let tournament = tournament();
        assert_eq!(
            ResultCard::new(&tournament).share_text(),
            "Went 1-2 with Leona at Summoner Skirmish, made Top 8, placed 6/40 #Riftbound"
        );
    }

    #[test]
    fn card_lists_both_sections() {
        let tournament = tournament();
        let card = ResultCard::new(&tournament).to_string();

        assert!(card.starts_with("Summoner Skirmish\nStandard (Constructed) | 2025-10-31\n"));
        assert!(card.contains("Record: 1-2 (33.3%)"));
        assert!(card.contains("Placed: 6 of 40"));
        assert!(card.contains("\nSwiss 1-1 (50%)\n"));
        assert!(card.contains("\nTop Cut 0-1 (0%)\n"));
        assert!(card.contains("  R2   vs Sett"));
        assert!(card.contains("  T8   vs Sett"));
    }
}
