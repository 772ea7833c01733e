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

use std::{io::Write as _, path::PathBuf};

use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use riftrecord::{
    COPYRIGHT, LONG_VERSION, match_result::MatchResult, round::EliminationStage,
};

/// Track your rounds at a Riftbound tournament. The tournament in progress is
/// kept in the data folder between runs.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Riftbound tournament match tracker")]
pub(crate) struct Args {
    /// Whether to log on the debug level
    #[arg(long)]
    pub debug: bool,

    /// Whether the application is being run by systemd
    #[arg(long)]
    pub systemd: bool,

    /// Where to keep the tournament in progress and the archive
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Who saved tournaments belong to
    #[arg(long, value_name = "OWNER")]
    pub user: Option<String>,

    /// Build the manpage
    #[arg(long)]
    pub man: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Start a new tournament
    New {
        /// What the event is called
        #[arg(long)]
        title: String,

        /// standard, ffa3, ffa4, 2v2, 1v1-duel or 1v1-match
        #[arg(default_value = "standard", long)]
        format: String,

        /// The leader you are playing, e.g. jinx or "Kai'Sa"
        #[arg(long)]
        leader: String,

        /// The day of the event, defaults to today
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,

        /// How many players entered
        #[arg(long)]
        players: Option<u32>,
    },

    /// Record a round
    Add {
        /// Your opponent's leader
        #[arg(long)]
        opponent: String,

        /// 2-0, 2-1, 1-2, 0-2 or draw
        #[arg(long)]
        result: MatchResult,

        /// Record a top cut round at this stage: top64 ... top4, finals
        #[arg(long, value_name = "STAGE")]
        top_cut: Option<EliminationStage>,

        /// Whether you won the dice roll
        #[arg(long)]
        dice: Option<bool>,

        /// Your opponent's name
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Change a recorded round
    Edit {
        /// The round's id, see `show --ids`
        id: String,

        #[arg(long)]
        opponent: Option<String>,

        #[arg(long)]
        result: Option<MatchResult>,

        #[arg(long)]
        dice: Option<bool>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a round, the rounds after it move up
    Delete {
        /// The round's id, see `show --ids`
        id: String,
    },

    /// Change the tournament's details
    Set {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        format: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        players: Option<u32>,

        /// Where you finished
        #[arg(long)]
        placing: Option<u32>,
    },

    /// Show the tournament in progress
    Show {
        /// Also print round ids
        #[arg(long)]
        ids: bool,
    },

    /// Show the statistics as RON
    Stats,

    /// Print a one line summary to share
    Share,

    /// List the leaders, optionally only the ones matching a search
    Leaders { query: Option<String> },

    /// Throw away the tournament in progress
    Reset,

    /// Save the tournament in progress to the archive
    Save,

    /// List your saved tournaments
    List,

    /// Show a saved tournament
    Get { id: String },

    /// Delete a saved tournament
    Remove { id: String },
}

impl Args {
    pub(crate) fn generate_man_page() -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Self::command().name("riftrecord").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-01-10");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("riftrecord.1", buffer)?;
        Ok(())
    }
}
