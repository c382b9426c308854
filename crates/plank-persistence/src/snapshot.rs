//! Point-in-time capture of the whole in-memory model.
//!
//! The core hands a `Snapshot` to the store at shutdown and receives one
//! back at startup; nothing in between touches the disk. All fields use
//! `#[serde(default)]` so older files keep loading as the model grows.

use plank_domain::{BoardTree, TodoList};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// The flat daily to-do list.
    #[serde(default)]
    pub todo_list: TodoList,

    /// The full forest of boards, counters, and cut buffers.
    #[serde(default)]
    pub tree: BoardTree,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.todo_list.tasks.is_empty()
            && self.tree.root_boards.is_empty()
            && self.tree.child_boards.is_empty()
    }
}
