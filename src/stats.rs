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

use crate::round::{EliminationStage, Round, RoundType};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// `wins-losses`, or `wins-losses-draws` once there is a draw.
    pub record: String,
    /// Wins over all rounds played, rounded to one decimal.
    pub win_rate_percent: f64,
}

impl Stats {
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.record, self.win_rate_percent)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FullStats {
    pub qualifying: Stats,
    pub elimination: Stats,
    pub overall: Stats,
    /// The stage of the last elimination round entered.
    pub final_stage: Option<EliminationStage>,
}

#[must_use]
pub fn compute_stats<'a, I>(rounds: I) -> Stats
where
    I: IntoIterator<Item = &'a Round>,
{
    let (mut wins, mut losses, mut draws) = (0u32, 0u32, 0u32);

    for round in rounds {
        if round.result.is_win() {
            wins += 1;
        } else if round.result.is_loss() {
            losses += 1;
        } else {
            draws += 1;
        }
    }

    let record = if draws == 0 {
        format!("{wins}-{losses}")
    } else {
        format!("{wins}-{losses}-{draws}")
    };

    let total = wins + losses + draws;
    let win_rate_percent = if total == 0 {
        0.0
    } else {
        (f64::from(wins) / f64::from(total) * 1_000.0).round() / 10.0
    };

    Stats {
        wins,
        losses,
        draws,
        record,
        win_rate_percent,
    }
}

#[must_use]
pub fn compute_full_stats(rounds: &[Round]) -> FullStats {
    fn of_type(rounds: &[Round], round_type: RoundType) -> impl Iterator<Item = &Round> {
        rounds
            .iter()
            .filter(move |round| round.round_type == round_type)
    }

    FullStats {
        qualifying: compute_stats(of_type(rounds, RoundType::Qualifying)),
        elimination: compute_stats(of_type(rounds, RoundType::Elimination)),
        overall: compute_stats(rounds),
        final_stage: of_type(rounds, RoundType::Elimination)
            .last()
            .and_then(|round| round.elimination_stage),
    }
}

#[cfg(test)]
mod tests {
    use crate::match_result::MatchResult;

    use super::*;

    fn rounds(results: &[(&str, RoundType)]) -> Vec<Round> {
        results
            .iter()
            .enumerate()
            .map(|(index, (result, round_type))| Round {
                id: index.to_string(),
                round_number: u32::try_from(index + 1).unwrap(),
                round_type: *round_type,
                opponent_leader_id: "yasuo".to_string(),
                opponent_name: None,
                result: result.parse().unwrap(),
                dice_won: None,
                elimination_stage: (*round_type == RoundType::Elimination)
                    .then_some(EliminationStage::Top8),
                notes: None,
            })
            .collect()
    }

    fn swiss(results: &[&str]) -> Vec<Round> {
        let results: Vec<_> = results
            .iter()
            .map(|result| (*result, RoundType::Qualifying))
            .collect();
        rounds(&results)
    }

    #[test]
    fn a_draw_shows_in_the_record() {
        let stats = compute_stats(&swiss(&["2-0", "1-2", "draw"]));

        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.record, "1-1-1");
        assert!((stats.win_rate_percent - 33.3).abs() < f64::EPSILON);
    }

    #[test]
    fn no_draws() {
        let stats = compute_stats(&swiss(&["2-0", "2-1", "0-2"]));

        assert_eq!(stats.record, "2-1");
        assert!((stats.win_rate_percent - 66.7).abs() < f64::EPSILON);
    }

    #[test]
    fn nothing_played() {
        let rounds: Vec<Round> = Vec::new();
        let stats = compute_stats(&rounds);

        assert_eq!(stats, Stats {
            record: "0-0".to_string(),
            ..Stats::default()
        });
        assert_eq!(stats.to_string(), "0-0 (0%)");
    }

    #[test]
    fn same_input_same_output() {
        let rounds = swiss(&["2-1", "0-2", "2-0", "draw"]);
        assert_eq!(compute_stats(&rounds), compute_stats(&rounds));
    }

    #[test]
    fn full_stats_split_by_type() {
        let mut rounds = rounds(&[
            ("2-0", RoundType::Qualifying),
            ("2-1", RoundType::Qualifying),
            ("2-0", RoundType::Elimination),
            ("1-2", RoundType::Qualifying),
            ("0-2", RoundType::Elimination),
        ]);
        rounds[4].elimination_stage = Some(EliminationStage::Top4);

        let stats = compute_full_stats(&rounds);

        assert_eq!(stats.qualifying.record, "2-1");
        assert_eq!(stats.elimination.record, "1-1");
        assert!((stats.elimination.win_rate_percent - 50.0).abs() < f64::EPSILON);
        assert_eq!(stats.overall.record, "3-2");
        assert_eq!(stats.overall.rounds(), 5);
        assert_eq!(stats.final_stage, Some(EliminationStage::Top4));
    }

    #[test]
    fn no_top_cut_no_final_stage() {
        let stats = compute_full_stats(&swiss(&["2-0"]));

        assert_eq!(stats.final_stage, None);
        assert_eq!(stats.elimination.record, "0-0");
        assert!(MatchResult::TwoZero.is_win());
    }
}
