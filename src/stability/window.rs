//! Rolling window of the last N per-frame totals
//!
//! Holds min(N, frames pushed) entries in chronological order. The oldest
//! entry is evicted once the window is at capacity.

use std::collections::VecDeque;

pub struct StabilityWindow {
    /// Oldest at the front, newest at the back
    totals: VecDeque<u32>,
    capacity: usize,
}

impl StabilityWindow {
    /// `capacity` is clamped to at least 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            totals: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    
    /// Push a new per-frame total, evicting the oldest beyond capacity
    pub fn push(&mut self, total: u32) {
        self.totals.push_back(total);
        while self.totals.len() > self.capacity {
            self.totals.pop_front();
        }
    }
    
    /// Window holds exactly `capacity` entries
    pub fn is_full(&self) -> bool {
        self.totals.len() == self.capacity
    }
    
    /// The shared value when the window is full and every entry agrees
    pub fn unanimous(&self) -> Option<u32> {
        if !self.is_full() {
            return None;
        }
        let first = *self.totals.front()?;
        self.totals.iter().all(|&t| t == first).then_some(first)
    }
    
    pub fn len(&self) -> usize {
        self.totals.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
    
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    
    /// Change capacity and drop accumulated history
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.totals.clear();
    }
    
    pub fn clear(&mut self) {
        self.totals.clear();
    }
    
    /// Entries oldest → newest (for debugging)
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.totals.iter().copied()
    }
}
