//! Deep copy and cut/paste over the board tree.
//!
//! A cut removes its target from the live tree and parks it, together
//! with every board reachable underneath it, in one of the tree's
//! buffers. A paste deep-copies the buffered item back in: every board,
//! column, and task in scope gets a fresh id, and each copied nested
//! board is re-registered with the tree. The buffer itself is never
//! consumed, so one cut supports any number of pastes.
//!
//! None of these operations roll back: a fault partway through (a board
//! missing from the tree or from a copy pool) is logged and skipped,
//! leaving the completed steps in place.

use tracing::warn;

use plank_core::PlankResult;

use crate::board::{Board, BoardId};
use crate::column::{BoardTask, Column};
use crate::task::{Task, TaskId};
use crate::task_list::TaskList;
use crate::tree::BoardTree;

impl Board {
    /// Structurally duplicate this board and everything it transitively
    /// owns, drawing fresh ids from the tree counters.
    ///
    /// Nested boards are looked up in `pool` (a flat list of detached or
    /// cloned source boards) and their copies registered with the tree.
    /// Cost is proportional to the full size of the subtree: every board,
    /// column, and task needs a distinct identity.
    pub fn deep_copy(
        &self,
        parent_task: Option<TaskId>,
        tree: &mut BoardTree,
        pool: &[Board],
    ) -> Board {
        let mut copy = Board::new(tree.allocate_board_id(), self.title.clone());
        copy.parent_task = parent_task;
        let mut children = Vec::new();
        for column in &self.columns {
            let column_copy = column.deep_copy(tree, &mut children, pool);
            copy.columns.push(column_copy);
        }
        copy.children = children;
        copy
    }
}

impl Column {
    /// Copy this column task by task, collecting the ids of any child
    /// boards minted along the way into `new_children` for the caller to
    /// graft onto the destination board.
    pub fn deep_copy(
        &self,
        tree: &mut BoardTree,
        new_children: &mut Vec<BoardId>,
        pool: &[Board],
    ) -> Column {
        let mut copy = Column::new(self.title.clone());
        for task in &self.tasks {
            copy.tasks.push(task.deep_copy(tree, new_children, pool));
        }
        copy
    }
}

impl BoardTask {
    /// Copy this task under a fresh id. If it spawned a board, that board
    /// is deep-copied from `pool` and registered with the tree; when the
    /// pool has no such board the link is kept as-is and the copy is a
    /// usable partial result.
    pub fn deep_copy(
        &self,
        tree: &mut BoardTree,
        new_children: &mut Vec<BoardId>,
        pool: &[Board],
    ) -> BoardTask {
        let task = Task {
            id: tree.allocate_task_id(),
            ..self.task.clone()
        };
        let mut copy = BoardTask {
            task,
            child_board: self.child_board,
        };

        if let Some(child_id) = self.child_board {
            match pool.iter().find(|b| b.id == child_id) {
                Some(source) => {
                    let child_copy = source.deep_copy(Some(copy.task.id), tree, pool);
                    let new_id = child_copy.id;
                    tree.add_child_board(child_copy);
                    new_children.push(new_id);
                    copy.child_board = Some(new_id);
                }
                None => {
                    warn!("couldn't find board {child_id} in the copy pool; link left unresolved");
                }
            }
        }
        copy
    }
}

impl BoardTree {
    /// Cut a root board, and the whole subtree hanging off it, into the
    /// board buffer.
    pub fn cut_root_board(&mut self, id: BoardId) -> PlankResult<()> {
        let board = self.remove_root(id)?;
        self.board_buffer.clear();
        let detached = self.detach_descendants(&board.children);
        for descendant in detached {
            self.board_buffer.push_descendant(descendant);
        }
        self.board_buffer.store(board);
        Ok(())
    }

    /// Paste a copy of the buffered root board, appending it to the
    /// roots. Returns the new board's id, or `None` when nothing was cut.
    pub fn paste_root_board(&mut self) -> Option<BoardId> {
        let (board, pool) = match self.board_buffer.item() {
            Some(board) => (board.clone(), self.board_buffer.descendants().to_vec()),
            None => return None,
        };
        let copy = board.deep_copy(None, self, &pool);
        let id = copy.id;
        self.add_root(copy);
        Some(id)
    }

    /// Cut a column, and every board reachable from its tasks, into the
    /// column buffer.
    pub fn cut_column(&mut self, board_id: BoardId, index: usize) -> PlankResult<()> {
        let column = self.get_board_mut(board_id)?.remove_column(index)?;
        self.column_buffer.clear();
        let detached = self.detach_refs(board_id, &column.child_board_ids());
        for descendant in detached {
            self.column_buffer.push_descendant(descendant);
        }
        self.column_buffer.store(column);
        Ok(())
    }

    /// Paste a copy of the buffered column into a board before `index`
    /// (out of range appends). Returns `false` when nothing was cut.
    pub fn paste_column(&mut self, board_id: BoardId, index: usize) -> PlankResult<bool> {
        self.get_board(board_id)?;
        let (column, pool) = match self.column_buffer.item() {
            Some(column) => (column.clone(), self.column_buffer.descendants().to_vec()),
            None => return Ok(false),
        };
        let mut new_children = Vec::new();
        let copy = column.deep_copy(self, &mut new_children, &pool);
        let board = self.get_board_mut(board_id)?;
        board.children.extend(new_children);
        board.insert_column(copy, index);
        Ok(true)
    }

    /// Cut a task, and any board subtree it references, into the task
    /// buffer. The remaining tasks in the column are reindexed.
    pub fn cut_task(
        &mut self,
        board_id: BoardId,
        col_index: usize,
        task_index: usize,
    ) -> PlankResult<()> {
        let task = self
            .get_board_mut(board_id)?
            .column_mut(col_index)?
            .remove(task_index)?;
        self.task_buffer.clear();
        if let Some(child_id) = task.child_board {
            let detached = self.detach_refs(board_id, &[child_id]);
            for descendant in detached {
                self.task_buffer.push_descendant(descendant);
            }
        }
        let column = self.get_board_mut(board_id)?.column_mut(col_index)?;
        if task_index < column.len() {
            column.reindex_priorities(task_index)?;
        }
        self.task_buffer.store(task);
        Ok(())
    }

    /// Paste a copy of the buffered task into a column before `index`
    /// (out of range appends), reindexing from the insertion point.
    /// Returns `false` when nothing was cut.
    pub fn paste_task(
        &mut self,
        board_id: BoardId,
        col_index: usize,
        index: usize,
    ) -> PlankResult<bool> {
        self.get_board(board_id)?.column(col_index)?;
        let (task, pool) = match self.task_buffer.item() {
            Some(task) => (task.clone(), self.task_buffer.descendants().to_vec()),
            None => return Ok(false),
        };
        let mut new_children = Vec::new();
        let copy = task.deep_copy(self, &mut new_children, &pool);
        let board = self.get_board_mut(board_id)?;
        board.children.extend(new_children);
        let column = board.column_mut(col_index)?;
        let pos = index.min(column.len());
        column.insert(copy, index);
        column.reindex_priorities(pos)?;
        Ok(true)
    }

    /// Duplicate a live root board in place, appending the copy as a new
    /// root. The buffers are untouched.
    pub fn duplicate_root_board(&mut self, id: BoardId) -> PlankResult<BoardId> {
        let source = self.get_board(id)?.clone();
        let pool = self.collect_descendants(&source.children);
        let copy = source.deep_copy(None, self, &pool);
        let new_id = copy.id;
        self.add_root(copy);
        Ok(new_id)
    }

    /// Move every board reachable from `ids` out of the live table,
    /// returning them flattened. Links between the detached boards stay
    /// intact; they are relinked wholesale by deep copy on paste.
    fn detach_descendants(&mut self, ids: &[BoardId]) -> Vec<Board> {
        let mut detached = Vec::new();
        let mut pending: Vec<BoardId> = ids.to_vec();
        while let Some(id) = pending.pop() {
            match self.child_boards.remove(&id) {
                Some(board) => {
                    pending.extend(&board.children);
                    detached.push(board);
                }
                None => warn!("board {id} missing from the tree during cut"),
            }
        }
        detached
    }

    /// Detach the boards referenced by `refs` and their subtrees,
    /// severing each from the surviving parent's child list. The tasks
    /// keep their child board ids so the buffered cut can still be
    /// pasted.
    fn detach_refs(&mut self, parent_id: BoardId, refs: &[BoardId]) -> Vec<Board> {
        let mut detached = Vec::new();
        for &child_id in refs {
            if let Ok(parent) = self.get_board_mut(parent_id) {
                if let Err(err) = parent.remove_child(child_id) {
                    warn!("failed to sever child board {child_id} from board {parent_id}: {err}");
                }
            }
            match self.remove_child_board(child_id) {
                Ok(board) => {
                    let grandchildren = board.children.clone();
                    detached.push(board);
                    detached.extend(self.detach_descendants(&grandchildren));
                }
                Err(err) => warn!("failed to detach referenced board {child_id}: {err}"),
            }
        }
        detached
    }

    /// Clone every board reachable from `ids` without detaching anything.
    fn collect_descendants(&self, ids: &[BoardId]) -> Vec<Board> {
        let mut collected = Vec::new();
        let mut pending: Vec<BoardId> = ids.to_vec();
        while let Some(id) = pending.pop() {
            match self.child_boards.get(&id) {
                Some(board) => {
                    pending.extend(&board.children);
                    collected.push(board.clone());
                }
                None => warn!("board {id} missing from the tree during duplicate"),
            }
        }
        collected
    }
}
