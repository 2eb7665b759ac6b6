#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use crate::error::TtrackError;
use crate::task::model::{Status, Task};

/// File-backed task collection. Every mutation is a full
/// load, in-memory edit, atomic overwrite cycle; there is no
/// long-lived state and no locking against concurrent invocations
/// (last writer wins).
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection. A missing file is `StoreMissing`;
    /// callers that treat absence as an empty collection use
    /// [`TaskStore::load_or_default`] instead.
    pub fn load(&self) -> Result<Vec<Task>, TtrackError> {
        let data = std::fs::read(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                TtrackError::StoreMissing {
                    path: self.path.clone(),
                }
            } else {
                TtrackError::IoPath {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        serde_json::from_slice(&data).map_err(|source| TtrackError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn load_or_default(&self) -> Result<Vec<Task>, TtrackError> {
        match self.load() {
            Ok(tasks) => Ok(tasks),
            Err(TtrackError::StoreMissing { .. }) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// Overwrites the file with the full sequence, pretty-printed.
    /// Writes to a temp file in the same directory and renames, so a
    /// failed save never leaves truncated content behind.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TtrackError> {
        let data =
            serde_json::to_vec_pretty(tasks).map_err(|source| TtrackError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &data).map_err(|source| TtrackError::IoPath {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| TtrackError::IoPath {
            path: self.path.clone(),
            source,
        })
    }

    /// Appends a new `todo` task and returns its id. A missing file
    /// starts a new empty collection.
    pub fn add(&self, description: &str) -> Result<u32, TtrackError> {
        let mut tasks = self.load_or_default()?;
        // max(id) + 1 rather than last-element + 1, so the policy
        // survives any future reordering of the collection.
        let id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        tasks.push(Task::new(id, description));
        self.save(&tasks)?;
        Ok(id)
    }

    pub fn update(&self, id: u32, description: &str) -> Result<(), TtrackError> {
        let mut tasks = self.load()?;
        let task = find_mut(&mut tasks, id)?;
        task.description = description.to_owned();
        task.touch();
        self.save(&tasks)
    }

    /// Removes exactly one entry, preserving the relative order of the
    /// rest. Deleted ids are not reissued unless the deleted task held
    /// the maximum id.
    pub fn delete(&self, id: u32) -> Result<(), TtrackError> {
        let mut tasks = self.load()?;
        let pos = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TtrackError::TaskNotFound(id))?;
        tasks.remove(pos);
        self.save(&tasks)
    }

    pub fn mark(&self, id: u32, status: Status) -> Result<(), TtrackError> {
        let mut tasks = self.load()?;
        let task = find_mut(&mut tasks, id)?;
        task.status = status;
        task.touch();
        self.save(&tasks)
    }

    /// Tasks matching `filter` (all of them when `None`), in
    /// collection order. A missing file is an empty collection.
    /// Read-only.
    pub fn list(&self, filter: Option<Status>) -> Result<Vec<Task>, TtrackError> {
        let tasks = self.load_or_default()?;
        Ok(tasks
            .into_iter()
            .filter(|t| filter.is_none_or(|s| t.status == s))
            .collect())
    }
}

fn find_mut(tasks: &mut [Task], id: u32) -> Result<&mut Task, TtrackError> {
    tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(TtrackError::TaskNotFound(id))
}
