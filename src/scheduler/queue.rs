/*!
 * Process Queue
 * Ordered sequence of process ids with O(1) push-back/pop-front and O(n) removal
 */

use crate::core::types::ProcessId;
use std::collections::VecDeque;

/// Queue of registry ids; never holds copies of process state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessQueue {
    ids: VecDeque<ProcessId>,
}

impl ProcessQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[inline]
    pub fn front(&self) -> Option<ProcessId> {
        self.ids.front().copied()
    }

    #[inline]
    pub fn push_back(&mut self, id: ProcessId) {
        debug_assert!(!self.contains(id), "pid {} queued twice", id);
        self.ids.push_back(id);
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<ProcessId> {
        self.ids.pop_front()
    }

    pub fn contains(&self, id: ProcessId) -> bool {
        self.ids.contains(&id)
    }

    /// Remove `id` wherever it sits; returns whether it was present
    pub fn remove(&mut self, id: ProcessId) -> bool {
        match self.ids.iter().position(|&queued| queued == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Keep only ids matching `keep`, preserving order
    pub fn retain(&mut self, keep: impl FnMut(&ProcessId) -> bool) {
        self.ids.retain(keep);
    }

    /// Move head to tail; returns the rotated id
    pub fn rotate(&mut self) -> Option<ProcessId> {
        let head = self.ids.pop_front()?;
        self.ids.push_back(head);
        Some(head)
    }

    /// Empty the queue, yielding ids in order
    pub fn take_all(&mut self) -> Vec<ProcessId> {
        self.ids.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.ids.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<ProcessId> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(ids: &[ProcessId]) -> ProcessQueue {
        let mut queue = ProcessQueue::new();
        for &id in ids {
            queue.push_back(id);
        }
        queue
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = queue(&[3, 1, 2]);
        assert_eq!(queue.front(), Some(3));
        assert_eq!(queue.pop_front(), Some(3));
        assert_eq!(queue.pop_front(), Some(1));
        assert_eq!(queue.pop_front(), Some(2));
        assert_eq!(queue.pop_front(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let mut queue = queue(&[0, 1, 2, 3]);
        assert!(queue.remove(2));
        assert!(!queue.remove(2));
        assert!(!queue.remove(99));
        assert_eq!(queue.to_vec(), vec![0, 1, 3]);
    }

    #[test]
    fn test_rotate() {
        let mut queue = queue(&[0, 1, 2]);
        assert_eq!(queue.rotate(), Some(0));
        assert_eq!(queue.to_vec(), vec![1, 2, 0]);
        assert_eq!(ProcessQueue::new().rotate(), None);
    }

    #[test]
    fn test_take_all_empties_queue() {
        let mut queue = queue(&[4, 5]);
        assert_eq!(queue.take_all(), vec![4, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_retain_preserves_order() {
        let mut queue = queue(&[0, 1, 2, 3, 4]);
        queue.retain(|&id| id % 2 == 0);
        assert_eq!(queue.to_vec(), vec![0, 2, 4]);
    }
}
