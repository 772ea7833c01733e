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

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::{error::Error, tournament::Tournament, utils::data_file};

/// Where the tournament in progress is kept between runs.
pub const STORAGE_KEY: &str = "riftrecord_tournament";

/// A device local get/set/delete by key store.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// If the store can't be read.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// # Errors
    ///
    /// If the store can't be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;

    /// Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// If the store can't be written.
    fn delete(&mut self, key: &str) -> Result<(), Error>;
}

/// One RON file per key inside a folder.
#[derive(Clone, Debug)]
pub struct FileStore {
    folder: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(folder: &Path) -> Self {
        Self {
            folder: folder.to_path_buf(),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        data_file(&self.folder, &format!("{key}.ron"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(string) => Ok(Some(string)),
            Err(error) => match error.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(Error::PersistenceUnavailable(format!(
                    "{}: {error}",
                    path.display()
                ))),
            },
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path(key);

        fs::create_dir_all(&self.folder)
            .and_then(|()| fs::write(&path, value))
            .map_err(|error| Error::PersistenceUnavailable(format!("{}: {error}", path.display())))
    }

    fn delete(&mut self, key: &str) -> Result<(), Error> {
        let path = self.path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) => match error.kind() {
                ErrorKind::NotFound => Ok(()),
                _ => Err(Error::PersistenceUnavailable(format!(
                    "{}: {error}",
                    path.display()
                ))),
            },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore(pub FxHashMap<String, String>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), Error> {
        self.0.remove(key);
        Ok(())
    }
}

/// # Errors
///
/// If the tournament can't be serialized or the store can't be written.
pub fn save_tournament<S: KeyValueStore + ?Sized>(
    store: &mut S,
    tournament: &Tournament,
) -> Result<(), Error> {
    let string = ron::ser::to_string_pretty(tournament, ron::ser::PrettyConfig::default())
        .map_err(|error| Error::PersistenceUnavailable(format!("RON: {error}")))?;

    store.set(STORAGE_KEY, &string)
}

/// A missing key and anything that doesn't parse both mean there is no
/// saved tournament.
pub fn load_tournament<S: KeyValueStore + ?Sized>(store: &S) -> Option<Tournament> {
    let string = match store.get(STORAGE_KEY) {
        Ok(Some(string)) => string,
        Ok(None) => {
            debug!("no saved tournament");
            return None;
        }
        Err(error) => {
            warn!("load tournament: {error}");
            return None;
        }
    };

    match ron::from_str(&string) {
        Ok(tournament) => Some(tournament),
        Err(error) => {
            warn!("load tournament: RON: {error}");
            None
        }
    }
}

/// # Errors
///
/// If the store can't be written.
pub fn clear_tournament<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), Error> {
    store.delete(STORAGE_KEY)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn temporary_folder(name: &str) -> PathBuf {
        let mut folder = env::temp_dir();
        folder.push(format!("riftrecord-{name}-{}", crate::utils::generate_id()));
        folder
    }

    #[test]
    fn memory_store() -> anyhow::Result<()> {
        let mut store = MemoryStore::default();

        assert_eq!(store.get("key")?, None);
        store.set("key", "value")?;
        assert_eq!(store.get("key")?.as_deref(), Some("value"));
        store.delete("key")?;
        store.delete("key")?;
        assert_eq!(store.get("key")?, None);
        Ok(())
    }

    #[test]
    fn file_store() -> anyhow::Result<()> {
        let folder = temporary_folder("file-store");
        let mut store = FileStore::new(&folder);

        assert_eq!(store.get("key")?, None);
        store.set("key", "(a: 1)")?;
        assert_eq!(store.get("key")?.as_deref(), Some("(a: 1)"));
        assert!(folder.join("key.ron").exists());
        store.delete("key")?;
        store.delete("key")?;
        assert_eq!(store.get("key")?, None);

        fs::remove_dir_all(folder)?;
        Ok(())
    }

    #[test]
    fn garbage_is_no_tournament() -> anyhow::Result<()> {
        let mut store = MemoryStore::default();
        store.set(STORAGE_KEY, "{ not ron")?;

        assert!(load_tournament(&store).is_none());
        Ok(())
    }
}
