// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The priority queue of pending sweep events.
//!
//! An array-backed binary min-heap over a caller-supplied total order.
//! Every insertion returns a stable handle, and `remove` invalidates a
//! pending event in `O(log n)` through a handle-to-slot map. The sweep uses
//! this to discard circle events whose arc triple changed before the event
//! fired.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Stable handle identifying an inserted event.
pub(crate) type EventHandle = u64;

pub(crate) struct EventQueue<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    heap: Vec<(EventHandle, E)>,
    slots: HashMap<EventHandle, usize>,
    next_handle: EventHandle,
    cmp: C,
}

impl<E, C> EventQueue<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    /// An empty queue. `capacity` is a pre-allocation hint; the queue
    /// grows as needed.
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        let capacity = capacity.max(2);
        EventQueue {
            heap: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            next_handle: 0,
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert an event, returning its handle. `O(log n)`.
    pub fn insert(&mut self, event: E) -> EventHandle {
        let handle = self.next_handle;
        self.next_handle += 1;
        let slot = self.heap.len();
        self.heap.push((handle, event));
        self.slots.insert(handle, slot);
        self.sift_up(slot);
        handle
    }

    /// Remove and return the minimum event. `O(log n)`.
    pub fn pop_min(&mut self) -> Option<E> {
        let last = self.heap.len().checked_sub(1)?;
        self.heap.swap(0, last);
        let (handle, event) = self.heap.pop()?;
        self.slots.remove(&handle);
        if !self.heap.is_empty() {
            self.record_slot(0);
            self.sift_down(0);
        }
        Some(event)
    }

    /// The minimum event without removing it. `O(1)`.
    pub fn peek_min(&self) -> Option<&E> {
        self.heap.first().map(|(_, event)| event)
    }

    /// Remove the event with the given handle, if it is still pending.
    /// `O(log n)`.
    pub fn remove(&mut self, handle: EventHandle) -> Option<E> {
        let slot = self.slots.remove(&handle)?;
        let last = self.heap.len() - 1;
        self.heap.swap(slot, last);
        let (_, event) = self.heap.pop()?;
        if slot < self.heap.len() {
            self.record_slot(slot);
            self.sift_down(slot);
            self.sift_up(slot);
        }
        Some(event)
    }

    fn record_slot(&mut self, slot: usize) {
        let handle = self.heap[slot].0;
        self.slots.insert(handle, slot);
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.heap[a].1, &self.heap[b].1) == Ordering::Less
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.heap.swap(slot, parent);
            self.record_slot(slot);
            slot = parent;
        }
        self.record_slot(slot);
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.heap.len() && self.less(left, smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.heap.swap(slot, smallest);
            self.record_slot(slot);
            slot = smallest;
        }
        self.record_slot(slot);
    }
}
