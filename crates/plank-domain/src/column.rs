use serde::{Deserialize, Serialize};

use crate::board::BoardId;
use crate::task::{Task, Taskable};
use crate::task_list::TaskList;

/// A task on a board. Unlike a to-do task, it may spawn a nested board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardTask {
    #[serde(flatten)]
    pub task: Task,
    /// Board spawned by this task, if any. A non-owning reference
    /// resolved through the board tree.
    #[serde(default)]
    pub child_board: Option<BoardId>,
}

impl BoardTask {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            child_board: None,
        }
    }

    pub fn has_child(&self) -> bool {
        self.child_board.is_some()
    }
}

impl Taskable for BoardTask {
    fn task(&self) -> &Task {
        &self.task
    }

    fn task_mut(&mut self) -> &mut Task {
        &mut self.task
    }
}

/// An ordered lane of tasks within a board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<BoardTask>,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Ids of the boards referenced by tasks in this column.
    pub fn child_board_ids(&self) -> Vec<BoardId> {
        self.tasks.iter().filter_map(|t| t.child_board).collect()
    }
}

impl TaskList for Column {
    type Task = BoardTask;

    fn tasks(&self) -> &[BoardTask] {
        &self.tasks
    }

    fn tasks_mut(&mut self) -> &mut Vec<BoardTask> {
        &mut self.tasks
    }
}
