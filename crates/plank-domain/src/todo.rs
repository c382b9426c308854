use serde::{Deserialize, Serialize};

use plank_core::PlankResult;

use crate::task::{Task, TaskId, Taskable};
use crate::task_list::TaskList;

/// A task on the flat daily to-do list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoTask {
    #[serde(flatten)]
    pub task: Task,
    /// A "core" task recurs daily.
    #[serde(default)]
    pub is_core: bool,
}

impl TodoTask {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            is_core: false,
        }
    }
}

impl Taskable for TodoTask {
    fn task(&self) -> &Task {
        &self.task
    }

    fn task_mut(&mut self) -> &mut Task {
        &mut self.task
    }
}

/// The flat daily to-do list, with its own id generation and a one-slot
/// cut buffer. The buffer is session-local and never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoList {
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<TodoTask>,
    #[serde(default)]
    pub task_id_counter: TaskId,
    #[serde(skip)]
    buffer: Option<TodoTask>,
}

impl TaskList for TodoList {
    type Task = TodoTask;

    fn tasks(&self) -> &[TodoTask] {
        &self.tasks
    }

    fn tasks_mut(&mut self) -> &mut Vec<TodoTask> {
        &mut self.tasks
    }
}

impl TodoList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn allocate_task_id(&mut self) -> TaskId {
        self.task_id_counter += 1;
        self.task_id_counter
    }

    /// Create a task and insert it at `index` (out of range appends),
    /// reindexing priorities from the insertion point.
    pub fn create_task(
        &mut self,
        name: String,
        description: String,
        is_core: bool,
        index: usize,
    ) -> TaskId {
        let id = self.allocate_task_id();
        let mut task = TodoTask::new(Task::new(id, name, description));
        task.is_core = is_core;
        let pos = index.min(self.len());
        task.task.priority = pos;
        self.insert(task, index);
        // pos is always in range after the insert
        let _ = self.reindex_priorities(pos);
        id
    }

    /// Flip a task's completion state. A task toggled to done moves to the
    /// end of the list and priorities are reindexed from its old slot.
    /// Returns the new state.
    pub fn toggle_done(&mut self, index: usize) -> PlankResult<bool> {
        let done = self.get_mut(index)?.task.toggle_done();
        if done {
            let task = self.remove(index)?;
            self.add(task);
            self.reindex_priorities(index)?;
        }
        Ok(done)
    }

    pub fn buffer(&self) -> Option<&TodoTask> {
        self.buffer.as_ref()
    }

    pub fn set_buffer(&mut self, task: Option<TodoTask>) {
        self.buffer = task;
    }

    /// Remove the task at `index` into the buffer.
    pub fn cut(&mut self, index: usize) -> PlankResult<()> {
        let task = self.remove(index)?;
        self.buffer = Some(task);
        if index < self.len() {
            self.reindex_priorities(index)?;
        }
        Ok(())
    }

    /// Insert a copy of the buffered task at `index` (out of range
    /// appends) under a fresh id, reindexing from the insertion point.
    /// Returns the position the copy landed at, or `None` when the buffer
    /// is empty. The buffer survives, so repeated pastes work.
    pub fn paste(&mut self, index: usize) -> Option<usize> {
        let mut task = self.buffer.clone()?;
        task.task.id = self.allocate_task_id();
        let pos = index.min(self.len());
        self.insert(task, index);
        let _ = self.reindex_priorities(pos);
        Some(pos)
    }
}
