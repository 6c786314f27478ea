//! Singly linked list stored in an index arena.
//!
//! Nodes live in one `Vec` and link to each other by slot index. Removed
//! nodes go on a free list and their slots are reused by later insertions,
//! so no node is ever individually allocated or freed.

use super::write_values;
use crate::counter::ComparisonCounter;
use crate::error::AlgoError;
use crate::sorting::comparison_sort::SortFn;
use std::fmt;

#[derive(Clone, Debug)]
struct Node {
    value: i32,
    next: Option<usize>,
}

#[derive(Clone, Default)]
pub struct LinkedList {
    nodes: Vec<Node>,
    head: Option<usize>,
    free: Vec<usize>,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn alloc(&mut self, value: i32, next: Option<usize>) -> usize {
        let node = Node { value, next };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Insert at the head in O(1).
    pub fn push_front(&mut self, value: i32) {
        let slot = self.alloc(value, self.head);
        self.head = Some(slot);
        self.len += 1;
    }

    /// Insert after the last node; walks the list, O(n).
    pub fn push_back(&mut self, value: i32) {
        let slot = self.alloc(value, None);
        match self.last_slot() {
            Some(last) => self.nodes[last].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.len += 1;
    }

    fn last_slot(&self) -> Option<usize> {
        let mut cursor = self.head?;
        while let Some(next) = self.nodes[cursor].next {
            cursor = next;
        }
        Some(cursor)
    }

    /// Unlink the first node holding `value`. Returns whether one was found.
    pub fn remove_value(&mut self, value: i32) -> bool {
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(slot) = cursor {
            if self.nodes[slot].value == value {
                let next = self.nodes[slot].next;
                match prev {
                    Some(p) => self.nodes[p].next = next,
                    None => self.head = next,
                }
                self.free.push(slot);
                self.len -= 1;
                return true;
            }
            prev = cursor;
            cursor = self.nodes[slot].next;
        }
        false
    }

    /// Position (0 = head) of the first node holding `value`.
    pub fn find(&self, value: i32) -> Option<usize> {
        self.iter().position(|&v| v == value)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Drop every node and reclaimed slot.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.len = 0;
    }

    /// Copy the values, head first, into a contiguous buffer.
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().copied().collect()
    }

    /// Sort by staging the values into a buffer, sorting it, and writing the
    /// result back in node order. Links are left untouched.
    pub fn sort_staged(
        &mut self,
        sort: SortFn,
        counter: &mut ComparisonCounter,
    ) -> Result<(), AlgoError> {
        let mut staged = self.to_vec();
        sort(&mut staged, counter)?;

        let mut cursor = self.head;
        for value in staged {
            let Some(slot) = cursor else { break };
            self.nodes[slot].value = value;
            cursor = self.nodes[slot].next;
        }
        Ok(())
    }
}

/// Head-to-tail iterator over a [`LinkedList`].
pub struct Iter<'a> {
    list: &'a LinkedList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.nodes[self.cursor?];
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i32> for LinkedList {
    /// Build a list whose head-to-tail order matches the iterator.
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let values: Vec<i32> = iter.into_iter().collect();
        let mut list = LinkedList::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.iter())
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
