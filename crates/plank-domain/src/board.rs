use serde::{Deserialize, Serialize};

use plank_core::{PlankError, PlankResult};

use crate::column::Column;
use crate::task::TaskId;

pub type BoardId = u64;

/// A kanban board: an ordered list of columns, an optional back-reference
/// to the task that spawned it, and the ids of the boards its own tasks
/// spawned in turn.
///
/// Both back-references are plain ids resolved through the tree, never
/// owning pointers, so moving a subtree cannot leave a dangling owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    /// Task that spawned this board; `None` for a root.
    #[serde(default)]
    pub parent_task: Option<TaskId>,
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Boards spawned by tasks in this board's columns.
    #[serde(default)]
    pub children: Vec<BoardId>,
}

impl Board {
    pub fn new(id: BoardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            parent_task: None,
            columns: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn column(&self, index: usize) -> PlankResult<&Column> {
        self.columns.get(index).ok_or(PlankError::IndexOutOfBounds {
            index,
            len: self.columns.len(),
        })
    }

    pub fn column_mut(&mut self, index: usize) -> PlankResult<&mut Column> {
        let len = self.columns.len();
        self.columns
            .get_mut(index)
            .ok_or(PlankError::IndexOutOfBounds { index, len })
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Insert a column before `index`; an out-of-range index appends.
    pub fn insert_column(&mut self, column: Column, index: usize) {
        if index >= self.columns.len() {
            self.columns.push(column);
            return;
        }
        self.columns.insert(index, column);
    }

    pub fn remove_column(&mut self, index: usize) -> PlankResult<Column> {
        if index >= self.columns.len() {
            return Err(PlankError::IndexOutOfBounds {
                index,
                len: self.columns.len(),
            });
        }
        Ok(self.columns.remove(index))
    }

    pub fn add_child(&mut self, id: BoardId) {
        self.children.push(id);
    }

    pub fn remove_child(&mut self, id: BoardId) -> PlankResult<()> {
        match self.children.iter().position(|&child| child == id) {
            Some(index) => {
                self.children.remove(index);
                Ok(())
            }
            None => Err(PlankError::NotFound(format!(
                "child board {id} not listed on board {}",
                self.id
            ))),
        }
    }
}
