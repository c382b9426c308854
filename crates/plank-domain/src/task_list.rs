use plank_core::{PlankError, PlankResult};

use crate::task::Taskable;

/// Shared contract for an ordered sequence of tasks, implemented by both
/// the daily to-do list and each board column.
///
/// Insert policy: an out-of-range index (including one equal to the
/// current length) appends; a valid index inserts before the current
/// occupant, shifting the rest up by one.
pub trait TaskList {
    type Task: Taskable;

    fn tasks(&self) -> &[Self::Task];
    fn tasks_mut(&mut self) -> &mut Vec<Self::Task>;

    fn len(&self) -> usize {
        self.tasks().len()
    }

    fn is_empty(&self) -> bool {
        self.tasks().is_empty()
    }

    fn bounds(&self, index: usize) -> PlankResult<()> {
        let len = self.tasks().len();
        if index >= len {
            return Err(PlankError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }

    fn get(&self, index: usize) -> PlankResult<&Self::Task> {
        self.bounds(index)?;
        Ok(&self.tasks()[index])
    }

    fn get_mut(&mut self, index: usize) -> PlankResult<&mut Self::Task> {
        self.bounds(index)?;
        Ok(&mut self.tasks_mut()[index])
    }

    fn add(&mut self, task: Self::Task) {
        self.tasks_mut().push(task);
    }

    fn insert(&mut self, task: Self::Task, index: usize) {
        if self.bounds(index).is_err() {
            self.tasks_mut().push(task);
            return;
        }
        self.tasks_mut().insert(index, task);
    }

    /// Remove the task at `index`, returning it by value so the caller can
    /// buffer it. Reindexing afterwards is the caller's responsibility.
    fn remove(&mut self, index: usize) -> PlankResult<Self::Task> {
        self.bounds(index)?;
        Ok(self.tasks_mut().remove(index))
    }

    /// Set each task's priority to its positional index, from `start` to
    /// the end. Idempotent and order-preserving.
    fn reindex_priorities(&mut self, start: usize) -> PlankResult<()> {
        self.bounds(start)?;
        for (index, task) in self.tasks_mut().iter_mut().enumerate().skip(start) {
            task.task_mut().priority = index;
        }
        Ok(())
    }
}
