use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use plank_core::{PlankError, PlankResult};

use crate::board::{Board, BoardId};
use crate::buffer::CutBuffer;
use crate::column::{BoardTask, Column};
use crate::task::{Task, TaskId};
use crate::task_list::TaskList;

/// Columns every new board starts with.
pub const DEFAULT_COLUMNS: [&str; 3] = ["TODO", "Working On", "Done"];

/// The forest of kanban boards: ordered root boards, a flat id-keyed table
/// of every nested board, the id counters, and the three cut/paste
/// buffers.
///
/// Every board reachable from a root through `children` lives in
/// `child_boards`, and every board in `child_boards` is reachable from
/// exactly one root. Cutting moves whole subtrees out of the table into a
/// buffer; pasting deep-copies them back in under fresh ids.
///
/// The counters only ever grow. Ids are never reused, which keeps them
/// unique across any sequence of cuts and pastes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardTree {
    #[serde(default)]
    pub root_boards: Vec<Board>,
    #[serde(default)]
    pub child_boards: HashMap<BoardId, Board>,
    #[serde(default)]
    pub board_id_counter: u64,
    #[serde(default)]
    pub task_id_counter: u64,
    #[serde(default)]
    pub board_buffer: CutBuffer<Board>,
    #[serde(default)]
    pub column_buffer: CutBuffer<Column>,
    #[serde(default)]
    pub task_buffer: CutBuffer<BoardTask>,
}

impl BoardTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_board_id(&mut self) -> BoardId {
        self.board_id_counter += 1;
        self.board_id_counter
    }

    pub fn allocate_task_id(&mut self) -> TaskId {
        self.task_id_counter += 1;
        self.task_id_counter
    }

    /// Look up a board anywhere in the forest. Nested boards are checked
    /// before roots.
    pub fn get_board(&self, id: BoardId) -> PlankResult<&Board> {
        self.child_boards
            .get(&id)
            .or_else(|| self.root_boards.iter().find(|b| b.id == id))
            .ok_or_else(|| PlankError::NotFound(format!("board {id}")))
    }

    pub fn get_board_mut(&mut self, id: BoardId) -> PlankResult<&mut Board> {
        if self.child_boards.contains_key(&id) {
            return self
                .child_boards
                .get_mut(&id)
                .ok_or_else(|| PlankError::NotFound(format!("board {id}")));
        }
        self.root_boards
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| PlankError::NotFound(format!("board {id}")))
    }

    pub fn add_root(&mut self, board: Board) {
        self.root_boards.push(board);
    }

    /// Insert a root board before `index`; an out-of-range index appends.
    pub fn insert_root(&mut self, board: Board, index: usize) {
        if index >= self.root_boards.len() {
            self.root_boards.push(board);
            return;
        }
        self.root_boards.insert(index, board);
    }

    pub fn remove_root(&mut self, id: BoardId) -> PlankResult<Board> {
        match self.root_boards.iter().position(|b| b.id == id) {
            Some(index) => Ok(self.root_boards.remove(index)),
            None => Err(PlankError::NotFound(format!("root board {id}"))),
        }
    }

    pub fn add_child_board(&mut self, board: Board) {
        self.child_boards.insert(board.id, board);
    }

    pub fn remove_child_board(&mut self, id: BoardId) -> PlankResult<Board> {
        self.child_boards
            .remove(&id)
            .ok_or_else(|| PlankError::NotFound(format!("child board {id}")))
    }

    /// Create a board with the three default columns. The caller decides
    /// where it goes.
    pub fn new_board(&mut self, title: impl Into<String>) -> Board {
        let mut board = Board::new(self.allocate_board_id(), title);
        for column_title in DEFAULT_COLUMNS {
            board.add_column(Column::new(column_title));
        }
        board
    }

    /// Create a task and insert it into a column at `index` (out of range
    /// appends), reindexing priorities from the insertion point.
    pub fn create_task(
        &mut self,
        board_id: BoardId,
        col_index: usize,
        index: usize,
        name: String,
        description: String,
    ) -> PlankResult<TaskId> {
        let id = self.allocate_task_id();
        let mut task = BoardTask::new(Task::new(id, name, description));
        let column = self.get_board_mut(board_id)?.column_mut(col_index)?;
        let pos = index.min(column.len());
        task.task.priority = pos;
        column.insert(task, index);
        column.reindex_priorities(pos)?;
        Ok(id)
    }

    /// Spawn a nested board under an existing task. A task spawns at most
    /// one board; if it already has one, that board's id is returned.
    pub fn create_child_board(
        &mut self,
        board_id: BoardId,
        col_index: usize,
        task_index: usize,
        title: impl Into<String>,
    ) -> PlankResult<BoardId> {
        let parent_task_id = {
            let task = self.get_board(board_id)?.column(col_index)?.get(task_index)?;
            if let Some(existing) = task.child_board {
                return Ok(existing);
            }
            task.task.id
        };

        let mut board = self.new_board(title);
        board.parent_task = Some(parent_task_id);
        let child_id = board.id;
        self.add_child_board(board);

        let parent = self.get_board_mut(board_id)?;
        parent.add_child(child_id);
        parent.column_mut(col_index)?.get_mut(task_index)?.child_board = Some(child_id);
        Ok(child_id)
    }

    /// Resolve the board a task points at. A task whose link no live board
    /// answers to yields [`PlankError::DanglingReference`].
    pub fn child_board_of(&self, task: &BoardTask) -> PlankResult<&Board> {
        match task.child_board {
            Some(id) => self
                .get_board(id)
                .map_err(|_| PlankError::DanglingReference { board_id: id }),
            None => Err(PlankError::NotFound(format!(
                "task {} has no child board",
                task.task.id
            ))),
        }
    }
}
