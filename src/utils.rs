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
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Utc;
use env_logger::Builder;
use log::LevelFilter;
use rand::{Rng, distr::Alphanumeric};

use crate::{HOME, Id};

const ID_SUFFIX_LEN: usize = 7;

pub fn init_logger(debug: bool, systemd: bool) {
    let mut builder = Builder::new();

    if systemd {
        builder.format(|formatter, record| {
            writeln!(formatter, "[{}]: {}", record.level(), record.args())
        });
    } else {
        builder.format(|formatter, record| {
            writeln!(
                formatter,
                "{} [{}] ({}): {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S %z"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    }

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else if debug {
        builder.filter(None, LevelFilter::Debug);
    } else {
        // if no RUST_LOG provided, default to logging at the Info level
        builder.filter(None, LevelFilter::Info);
    }

    builder.init();
}

/// The folder all of our files live in, `$XDG_DATA_HOME/riftrecord` on Linux.
#[must_use]
pub fn data_folder() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_default();
    path.push(HOME);
    path
}

/// # Errors
///
/// If the folder can't be created.
pub fn create_data_folder(folder: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(folder)?;
    Ok(())
}

#[must_use]
pub fn data_file(folder: &Path, file: &str) -> PathBuf {
    folder.join(file)
}

/// A new id: the current unix time in milliseconds and a short random
/// lowercase suffix, e.g. `1735689600000-k3x9a0q`.
#[must_use]
pub fn generate_id() -> Id {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect();

    format!("{}-{suffix}", Utc::now().timestamp_millis())
}
