use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TaskId = u64;

/// The fields shared by every kind of task.
///
/// `priority` is a dense 0-based rank equal to the task's position in its
/// container; it is maintained by the container's reindexing pass rather
/// than set freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub show_description: bool,
    pub started: DateTime<Utc>,
    #[serde(default)]
    pub finished: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: usize,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            show_description: false,
            started: Utc::now(),
            finished: None,
            priority: 0,
            done: false,
        }
    }

    /// Flip the completion state, stamping or clearing the finish time.
    /// Returns the new state.
    pub fn toggle_done(&mut self) -> bool {
        self.done = !self.done;
        self.finished = if self.done { Some(Utc::now()) } else { None };
        self.done
    }

    pub fn toggle_description(&mut self) {
        self.show_description = !self.show_description;
    }
}

/// Access to the common [`Task`] fields, letting containers operate on any
/// task kind.
pub trait Taskable {
    fn task(&self) -> &Task;
    fn task_mut(&mut self) -> &mut Task;
}

impl Taskable for Task {
    fn task(&self) -> &Task {
        self
    }

    fn task_mut(&mut self) -> &mut Task {
        self
    }
}
