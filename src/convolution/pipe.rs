use std::ops::{Index, IndexMut};

/// Handle to a pipe inside a [`Pipes`] arena. Two handles are the same pipe
/// iff they are equal.
#[derive(PartialEq, PartialOrd, Ord, Clone, Copy, Hash, Eq, Debug)]
pub struct PipeId(pub usize);

#[derive(Clone, Copy, Default, Debug)]
pub struct Pipe {
    value: f64,
}

impl Pipe {
    pub fn get(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }
}

/// Slot table holding every pipe of one network.
#[derive(Clone, Default, Debug)]
pub struct Pipes(Vec<Pipe>);

impl Pipes {
    pub fn new() -> Pipes {
        Pipes(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Pipes {
        Pipes(Vec::with_capacity(capacity))
    }

    pub fn create(&mut self) -> PipeId {
        self.0.push(Pipe::default());
        PipeId(self.0.len() - 1)
    }

    pub fn create_many(&mut self, count: usize) -> Vec<PipeId> {
        (0..count).map(|_| self.create()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: PipeId) -> bool {
        id.0 < self.0.len()
    }

    pub fn get(&self, id: PipeId) -> f64 {
        self[id].get()
    }

    pub fn set(&mut self, id: PipeId, value: f64) {
        self[id].set(value);
    }

    pub fn iter(&self) -> std::slice::Iter<Pipe> {
        self.0.iter()
    }
}

impl Index<PipeId> for Pipes {
    type Output = Pipe;
    fn index(&self, index: PipeId) -> &Self::Output {
        &self.0[index.0]
    }
}

impl IndexMut<PipeId> for Pipes {
    fn index_mut(&mut self, index: PipeId) -> &mut Self::Output {
        &mut self.0[index.0]
    }
}
