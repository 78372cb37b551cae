use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use super::{Task, TaskStatus};
use crate::errors::{CoreError, CoreResult};
use crate::storage;

/// Flat-file home of the task list, one pipe-delimited line per task.
///
/// Same whole-file read/mutate/write discipline as the ledger store, and
/// the same lossy load policy: unreadable state degrades to an empty list.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at the shared application data directory.
    pub fn at_default() -> Self {
        Self::new(storage::tasks_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted list, skipping malformed lines.
    pub fn load(&self) -> Vec<Task> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!(path = %self.path.display(), %err, "task store unreadable; starting empty");
                }
                return Vec::new();
            }
        };
        let mut tasks = Vec::new();
        for (index, line) in data.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Task::parse_line(line) {
                Some(task) => tasks.push(task),
                None => {
                    warn!(path = %self.path.display(), line = index + 1, "skipping malformed task line");
                }
            }
        }
        tasks
    }

    /// Serializes the whole list and replaces the stored document.
    pub fn save(&self, tasks: &[Task]) -> CoreResult<()> {
        let mut data = String::new();
        for task in tasks {
            data.push_str(&task.to_line());
            data.push('\n');
        }
        storage::write_atomic(&self.path, &data)?;
        debug!(path = %self.path.display(), tasks = tasks.len(), "task store saved");
        Ok(())
    }
}

/// Mutations over the in-memory task list; persistence stays with the
/// caller, mirroring the account service.
pub struct TaskService;

impl TaskService {
    pub fn add(tasks: &mut Vec<Task>, description: &str) -> CoreResult<u32> {
        let description = description.trim();
        if description.is_empty() {
            return Err(CoreError::Validation(
                "Task description must not be empty".into(),
            ));
        }
        let id = Self::next_id(tasks);
        tasks.push(Task::new(id, description));
        Ok(id)
    }

    pub fn complete(tasks: &mut [Task], id: u32) -> CoreResult<&Task> {
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(CoreError::TaskNotFound(id))?;
        if task.is_completed() {
            return Err(CoreError::Validation(format!(
                "Task {} is already completed",
                id
            )));
        }
        task.status = TaskStatus::Completed;
        Ok(task)
    }

    pub fn remove(tasks: &mut Vec<Task>, id: u32) -> CoreResult<Task> {
        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(CoreError::TaskNotFound(id))?;
        Ok(tasks.remove(index))
    }

    pub fn next_id(tasks: &[Task]) -> u32 {
        tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    pub fn pending(tasks: &[Task]) -> Vec<&Task> {
        tasks.iter().filter(|task| !task.is_completed()).collect()
    }

    pub fn completed(tasks: &[Task]) -> Vec<&Task> {
        tasks.iter().filter(|task| task.is_completed()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in_temp_dir() -> (TaskStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = TaskStore::new(temp.path().join("tasks.txt"));
        (store, temp)
    }

    #[test]
    fn ids_grow_from_the_current_maximum() {
        let mut tasks = Vec::new();
        assert_eq!(TaskService::add(&mut tasks, "first").unwrap(), 1);
        assert_eq!(TaskService::add(&mut tasks, "second").unwrap(), 2);
        TaskService::remove(&mut tasks, 1).unwrap();
        assert_eq!(TaskService::add(&mut tasks, "third").unwrap(), 3);
    }

    #[test]
    fn blank_descriptions_are_rejected() {
        let mut tasks = Vec::new();
        assert!(matches!(
            TaskService::add(&mut tasks, "   "),
            Err(CoreError::Validation(_))
        ));
        assert!(tasks.is_empty());
    }

    #[test]
    fn completing_twice_is_reported() {
        let mut tasks = Vec::new();
        let id = TaskService::add(&mut tasks, "once").unwrap();
        TaskService::complete(&mut tasks, id).expect("first completion");
        assert!(matches!(
            TaskService::complete(&mut tasks, id),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn missing_ids_are_reported() {
        let mut tasks = Vec::new();
        assert!(matches!(
            TaskService::complete(&mut tasks, 42),
            Err(CoreError::TaskNotFound(42))
        ));
        assert!(matches!(
            TaskService::remove(&mut tasks, 42),
            Err(CoreError::TaskNotFound(42))
        ));
    }

    #[test]
    fn save_then_load_round_trips() {
        let (store, _guard) = store_in_temp_dir();
        let mut tasks = Vec::new();
        TaskService::add(&mut tasks, "write report | appendix").unwrap();
        TaskService::add(&mut tasks, "submit").unwrap();
        TaskService::complete(&mut tasks, 2).unwrap();
        store.save(&tasks).expect("save tasks");
        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn malformed_lines_are_skipped_on_load() {
        let (store, _guard) = store_in_temp_dir();
        fs::write(
            store.path(),
            "1|PENDING|2025-03-01 09:00:00|keep me\ngarbage line\n2|NOPE|2025-03-01 09:00:00|drop me\n",
        )
        .expect("write mixed data");
        let tasks = store.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "keep me");
    }

    #[test]
    fn missing_file_loads_as_empty_list() {
        let (store, _guard) = store_in_temp_dir();
        assert!(store.load().is_empty());
    }
}
