use super::body::Body;

/// Fixed-capacity history of a body's past states, oldest first.
///
/// Backed by a ring: once full, each push overwrites the oldest slot and moves
/// the head forward, so appends never shift the stored samples.
#[derive(Debug, Clone)]
pub struct Trajectory {
    samples: Vec<Body>,
    head: usize,
    capacity: usize,
}

impl Trajectory {
    /// Storage grows with the pushed samples rather than being reserved up
    /// front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::new(),
            head: 0,
            capacity,
        }
    }

    pub fn push(&mut self, sample: Body) {
        if self.capacity == 0 {
            return;
        }

        if self.samples.len() < self.capacity {
            self.samples.push(sample);
        } else {
            self.samples[self.head] = sample;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Samples in the order they were pushed.
    pub fn iter(&self) -> impl Iterator<Item = &Body> + '_ {
        let (newer, older) = self.samples.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    pub fn latest(&self) -> Option<&Body> {
        if self.samples.is_empty() {
            return None;
        }
        let len = self.samples.len();
        self.samples.get((self.head + len - 1) % len)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.head = 0;
    }
}
