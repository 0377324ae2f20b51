#[derive(Debug, Copy, Clone)]
pub struct ChainCase {
    name: &'static str,
    group: ChainGroup,
    depth: usize,
}

impl ChainCase {
    pub fn new(name: &'static str, group: ChainGroup, depth: usize) -> Self {
        Self { name, group, depth }
    }

    pub fn shallow(name: &'static str, depth: usize) -> Self {
        Self::new(name, ChainGroup::Shallow, depth)
    }

    pub fn deep(name: &'static str, depth: usize) -> Self {
        Self::new(name, ChainGroup::Deep, depth)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> ChainGroup {
        self.group
    }

    /// number of wrappers around the leaf
    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[derive(Clone, Copy, Debug)]
pub enum ChainGroup {
    Shallow,
    Deep,
}
