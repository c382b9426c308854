use serde::{Deserialize, Serialize};

use crate::board::Board;

/// One-slot holding area for a cut item, plus the flat pool of boards
/// detached from the tree as part of that cut.
///
/// Pasting reads the buffer without consuming it, so one cut supports any
/// number of pastes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutBuffer<T> {
    item: Option<T>,
    descendants: Vec<Board>,
}

impl<T> Default for CutBuffer<T> {
    fn default() -> Self {
        Self {
            item: None,
            descendants: Vec::new(),
        }
    }
}

impl<T> CutBuffer<T> {
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn store(&mut self, item: T) {
        self.item = Some(item);
    }

    pub fn clear(&mut self) {
        self.item = None;
        self.descendants.clear();
    }

    pub fn push_descendant(&mut self, board: Board) {
        self.descendants.push(board);
    }

    pub fn descendants(&self) -> &[Board] {
        &self.descendants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_clear() {
        let mut buffer: CutBuffer<Board> = CutBuffer::default();
        assert!(buffer.is_empty());

        buffer.push_descendant(Board::new(2, "nested"));
        buffer.store(Board::new(1, "root"));
        assert!(!buffer.is_empty());
        assert_eq!(buffer.item().unwrap().id, 1);
        assert_eq!(buffer.descendants().len(), 1);

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.descendants().is_empty());
    }
}
