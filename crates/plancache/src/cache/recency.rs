//! Arena-backed recency list.
//!
//! An intrusive doubly linked list with two permanent sentinel nodes,
//! stored in a slot arena and linked by indices rather than pointers.
//! The node after the head sentinel is the least recently used entry; the
//! node before the tail sentinel is the most recently used. Unlink and
//! append are O(1); freed slots are recycled through a free list.

/// Index into the node arena.
pub(crate) type NodeIndex = usize;

const HEAD: NodeIndex = 0;
const TAIL: NodeIndex = 1;

struct Node<T> {
    prev: NodeIndex,
    next: NodeIndex,
    /// `None` only for the two sentinels and recycled slots.
    item: Option<T>,
}

pub(crate) struct RecencyList<T> {
    arena: Vec<Node<T>>,
    free: Vec<NodeIndex>,
    len: usize,
}

impl<T> RecencyList<T> {
    pub(crate) fn new() -> Self {
        let arena = vec![
            Node {
                prev: HEAD,
                next: TAIL,
                item: None,
            },
            Node {
                prev: HEAD,
                next: TAIL,
                item: None,
            },
        ];
        Self {
            arena,
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Link `item` at the most-recent end, immediately before the tail
    /// sentinel. Returns the slot index, stable until the item is removed.
    pub(crate) fn push_most_recent(&mut self, item: T) -> NodeIndex {
        let prev = self.arena[TAIL].prev;
        let idx = match self.free.pop() {
            Some(idx) => {
                self.arena[idx] = Node {
                    prev,
                    next: TAIL,
                    item: Some(item),
                };
                idx
            }
            None => {
                self.arena.push(Node {
                    prev,
                    next: TAIL,
                    item: Some(item),
                });
                self.arena.len() - 1
            }
        };
        self.arena[prev].next = idx;
        self.arena[TAIL].prev = idx;
        self.len += 1;
        idx
    }

    /// Unlink the node at `idx` and return its item, recycling the slot.
    pub(crate) fn remove(&mut self, idx: NodeIndex) -> T {
        debug_assert!(idx != HEAD && idx != TAIL, "cannot remove a sentinel");
        let (prev, next) = (self.arena[idx].prev, self.arena[idx].next);
        self.arena[prev].next = next;
        self.arena[next].prev = prev;
        let item = self.arena[idx]
            .item
            .take()
            .expect("removed a vacant recency slot");
        self.free.push(idx);
        self.len -= 1;
        item
    }

    /// Promote the node at `idx` to the most-recent end: unlink its
    /// neighbors, relink before the tail sentinel. The slot index stays
    /// stable, so the key index needs no update.
    pub(crate) fn promote(&mut self, idx: NodeIndex) {
        let (prev, next) = (self.arena[idx].prev, self.arena[idx].next);
        if next == TAIL {
            return; // already most recent
        }
        self.arena[prev].next = next;
        self.arena[next].prev = prev;
        let last = self.arena[TAIL].prev;
        self.arena[idx].prev = last;
        self.arena[idx].next = TAIL;
        self.arena[last].next = idx;
        self.arena[TAIL].prev = idx;
    }

    /// Slot index of the least recently used entry, if any.
    pub(crate) fn least_recent(&self) -> Option<NodeIndex> {
        match self.arena[HEAD].next {
            TAIL => None,
            idx => Some(idx),
        }
    }

    pub(crate) fn get(&self, idx: NodeIndex) -> &T {
        self.arena[idx]
            .item
            .as_ref()
            .expect("accessed a vacant recency slot")
    }

    /// Iterate items from least to most recently used. Read-only.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.arena[HEAD].next,
        }
    }

    /// Drop every entry and reset to the two bare sentinels.
    pub(crate) fn clear(&mut self) {
        self.arena.truncate(2);
        self.arena[HEAD].next = TAIL;
        self.arena[TAIL].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }
}

pub(crate) struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: NodeIndex,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cursor == TAIL {
            return None;
        }
        let node = &self.list.arena[self.cursor];
        self.cursor = node.next;
        node.item.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &RecencyList<u32>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_push_orders_lru_to_mru() {
        let mut list = RecencyList::new();
        list.push_most_recent(1);
        list.push_most_recent(2);
        list.push_most_recent(3);
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_least_recent_is_front() {
        let mut list = RecencyList::new();
        assert_eq!(list.least_recent(), None);
        let a = list.push_most_recent(10);
        list.push_most_recent(20);
        assert_eq!(list.least_recent(), Some(a));
    }

    #[test]
    fn test_remove_relinks_neighbors() {
        let mut list = RecencyList::new();
        list.push_most_recent(1);
        let b = list.push_most_recent(2);
        list.push_most_recent(3);
        assert_eq!(list.remove(b), 2);
        assert_eq!(collect(&list), vec![1, 3]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_promote_moves_to_mru_end() {
        let mut list = RecencyList::new();
        let a = list.push_most_recent(1);
        list.push_most_recent(2);
        list.push_most_recent(3);
        list.promote(a);
        assert_eq!(collect(&list), vec![2, 3, 1]);
        // Promoting the MRU entry is a no-op.
        list.promote(a);
        assert_eq!(collect(&list), vec![2, 3, 1]);
    }

    #[test]
    fn test_slot_recycling_keeps_indices_stable() {
        let mut list = RecencyList::new();
        let a = list.push_most_recent(1);
        let b = list.push_most_recent(2);
        list.remove(a);
        let c = list.push_most_recent(3);
        // The freed slot is reused; the surviving index is untouched.
        assert_eq!(c, a);
        assert_eq!(*list.get(b), 2);
        assert_eq!(collect(&list), vec![2, 3]);
    }

    #[test]
    fn test_clear_resets_to_sentinels() {
        let mut list = RecencyList::new();
        list.push_most_recent(1);
        list.push_most_recent(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.least_recent(), None);
        let idx = list.push_most_recent(9);
        assert_eq!(*list.get(idx), 9);
    }
}
