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

#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

mod command_line;

use std::path::Path;

use clap::{CommandFactory, Parser};
use log::debug;
use riftrecord::{
    auth::Owner,
    cache::FileStore,
    card::ResultCard,
    format::TournamentFormat,
    leader::{self, LEADERS},
    remote::{ARCHIVE_FILE, Archive, RemoteStorage},
    round::{NewRound, RoundPatch, RoundType},
    session::Session,
    tournament::TournamentPatch,
    utils::{self, create_data_folder, data_file},
};

use crate::command_line::{Args, Command};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug, args.systemd);

    if args.man {
        return Args::generate_man_page();
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    let folder = args.data_dir.unwrap_or_else(utils::data_folder);
    create_data_folder(&folder)?;
    debug!("data folder: {}", folder.display());

    let mut session = Session::new(FileStore::new(&folder));
    run(command, &mut session, &folder, args.user.as_deref())
}

#[allow(clippy::too_many_lines)]
fn run(
    command: Command,
    session: &mut Session<FileStore>,
    folder: &Path,
    user: Option<&str>,
) -> anyhow::Result<()> {
    match command {
        Command::New {
            title,
            format,
            leader,
            date,
            players,
        } => {
            let tournament = session.create_tournament(
                &title,
                &format,
                &leader_id(&leader),
                date,
                players,
            )?;
            println!("= started {} ({})", tournament.title, tournament.id);
        }
        Command::Add {
            opponent,
            result,
            top_cut,
            dice,
            name,
            notes,
        } => {
            let round_type = if top_cut.is_some() {
                RoundType::Elimination
            } else {
                RoundType::Qualifying
            };

            let round = session.add_round(NewRound {
                opponent_name: name,
                elimination_stage: top_cut,
                dice_won: dice,
                notes,
                ..NewRound::new(&leader_id(&opponent), result, round_type)
            })?;
            println!("= {} {} ({})", round.label(), round.result.label(), round.id);
        }
        Command::Edit {
            id,
            opponent,
            result,
            dice,
            name,
            notes,
        } => {
            let patch = RoundPatch {
                opponent_leader_id: opponent.as_deref().map(leader_id),
                result,
                dice_won: dice.map(Some),
                opponent_name: name.map(clearable),
                notes: notes.map(clearable),
                ..RoundPatch::default()
            };

            if patch.is_empty() {
                println!("= nothing to change");
            } else {
                let round = session.update_round(&id, patch)?;
                println!("= {} {}", round.label(), round.result.label());
            }
        }
        Command::Delete { id } => {
            let round = session.delete_round(&id)?;
            println!(
                "= deleted {} vs {}",
                round.label(),
                leader::display_name(&round.opponent_leader_id)
            );
        }
        Command::Set {
            title,
            format,
            date,
            players,
            placing,
        } => {
            let format = format
                .map(|format| format.parse::<TournamentFormat>())
                .transpose()?;

            let tournament = session.update_tournament(TournamentPatch {
                title,
                format,
                date,
                player_count: players.map(Some),
                placing: placing.map(Some),
                ..TournamentPatch::default()
            })?;
            println!("= updated {}", tournament.title);
        }
        Command::Show { ids } => match session.tournament() {
            Some(tournament) => {
                print!("{}", ResultCard::new(tournament));
                if ids {
                    println!();
                    for round in &tournament.rounds {
                        println!("{} {}", round.id, round.label());
                    }
                }
            }
            None => println!("= no tournament in progress"),
        },
        Command::Stats => match session.stats() {
            Some(stats) => println!(
                "{}",
                ron::ser::to_string_pretty(&stats, ron::ser::PrettyConfig::default())?
            ),
            None => println!("= no tournament in progress"),
        },
        Command::Share => match session.tournament() {
            Some(tournament) => println!("{}", ResultCard::new(tournament).share_text()),
            None => println!("= no tournament in progress"),
        },
        Command::Leaders { query } => {
            let leaders = match &query {
                Some(query) => leader::search_leaders(query),
                None => LEADERS.iter().collect(),
            };

            for leader in leaders {
                println!("{:<12} {leader}", leader.id);
            }
        }
        Command::Reset => {
            session.reset_tournament();
            println!("= reset");
        }
        Command::Save => {
            let mut archive = Archive::load(&data_file(folder, ARCHIVE_FILE))?;
            let saved = session.commit(user, &mut archive)?;
            println!("= saved as {}", saved.id);
        }
        Command::List => {
            let owner = Owner::authenticate(user)?;
            let archive = Archive::load(&data_file(folder, ARCHIVE_FILE))?;

            for tournament in archive.list_tournaments(&owner)? {
                println!(
                    "{} {} {:<24} {}",
                    tournament.id,
                    tournament.date,
                    tournament.title,
                    tournament.stats().overall
                );
            }
        }
        Command::Get { id } => {
            let owner = Owner::authenticate(user)?;
            let archive = Archive::load(&data_file(folder, ARCHIVE_FILE))?;
            let tournament = archive.get_tournament(&owner, &id)?;
            print!("{}", ResultCard::new(&tournament));
        }
        Command::Remove { id } => {
            let owner = Owner::authenticate(user)?;
            let mut archive = Archive::load(&data_file(folder, ARCHIVE_FILE))?;
            archive.delete_tournament(&owner, &id)?;
            println!("= removed {id}");
        }
    }

    Ok(())
}

/// Accepts an id or a name the way people type it.
fn leader_id(text: &str) -> String {
    leader::leader_by_name(text).map_or_else(|| text.to_string(), |leader| leader.id.to_string())
}

/// An empty string clears the field.
fn clearable(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
