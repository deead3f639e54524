use alloc::string::String;
use alloc::vec::Vec;

use crate::ActiveSet;

/// One proxy control per slide.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    /// Accessible label, e.g. `"Go to brand 3"`.
    pub label: String,
}

/// The indicator strip. Built once; the number of indicators never changes afterwards.
#[derive(Clone, Debug)]
pub struct Indicators {
    labels: Vec<String>,
    active: ActiveSet,
}

impl Indicators {
    pub(crate) fn build(count: usize, label: impl Fn(usize) -> String) -> Self {
        Self {
            labels: (0..count).map(label).collect(),
            active: ActiveSet::new(count),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.is_active(index)
    }

    pub fn active(&self) -> Option<usize> {
        self.active.active()
    }

    pub(crate) fn sync(&mut self, index: usize) {
        self.active.activate(index);
    }

    pub fn get(&self, index: usize) -> Option<Indicator> {
        let label = self.labels.get(index)?;
        Some(Indicator {
            index,
            active: self.active.is_active(index),
            label: label.clone(),
        })
    }

    pub fn for_each(&self, mut f: impl FnMut(usize, bool, &str)) {
        for (i, (label, active)) in self.labels.iter().zip(self.active.iter()).enumerate() {
            f(i, active, label);
        }
    }

    pub fn to_vec(&self) -> Vec<Indicator> {
        (0..self.len()).filter_map(|i| self.get(i)).collect()
    }
}
