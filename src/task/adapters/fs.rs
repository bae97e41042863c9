//! Directory-backed slot store.
//!
//! Each slot is a `<key>.json` file inside a single capability-scoped
//! directory. Writes go to a temporary sibling first and are renamed into
//! place, so a reader never observes a half-written slot.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::task::ports::{SlotStore, SlotStoreError, SlotStoreResult, StorageSlot};

/// Slot store persisting each slot as a JSON file in one directory.
#[derive(Debug)]
pub struct FsSlotStore {
    dir: Dir,
}

impl FsSlotStore {
    /// Opens `path` as the storage directory, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`SlotStoreError::Persistence`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> SlotStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(SlotStoreError::persistence)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(SlotStoreError::persistence)?;
        Ok(Self { dir })
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

fn file_name(slot: StorageSlot) -> String {
    format!("{}.json", slot.key())
}

fn temp_file_name(slot: StorageSlot) -> String {
    format!(".{}.json.tmp", slot.key())
}

impl SlotStore for FsSlotStore {
    fn get(&self, slot: StorageSlot) -> SlotStoreResult<Option<String>> {
        match self.dir.read_to_string(file_name(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SlotStoreError::persistence(err)),
        }
    }

    fn set(&self, slot: StorageSlot, value: &str) -> SlotStoreResult<()> {
        let temp = temp_file_name(slot);
        self.dir
            .write(&temp, value)
            .map_err(SlotStoreError::persistence)?;
        self.dir
            .rename(&temp, &self.dir, file_name(slot))
            .map_err(SlotStoreError::persistence)
    }
}
