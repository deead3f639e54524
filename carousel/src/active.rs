use alloc::vec;
use alloc::vec::Vec;

/// Positional "active" flags with at most one set.
///
/// Used for both slides and indicators; index `i` of one set always corresponds to index `i`
/// of the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSet {
    flags: Vec<bool>,
    active: Option<usize>,
}

impl ActiveSet {
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Marks `index` active and every other entry inactive.
    ///
    /// Out-of-range indexes are ignored (and debug-asserted).
    pub fn activate(&mut self, index: usize) {
        if index >= self.flags.len() {
            cwarn!(index, len = self.flags.len(), "ActiveSet: out-of-bounds index");
            debug_assert!(
                index < self.flags.len(),
                "ActiveSet: out-of-bounds index (i={index}, len={})",
                self.flags.len()
            );
            return;
        }
        for (i, flag) in self.flags.iter_mut().enumerate() {
            *flag = i == index;
        }
        self.active = Some(index);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.flags.iter().copied()
    }

    pub fn active_count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }
}
