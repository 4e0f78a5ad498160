//! Active-section selection and one-way reveal tracking.
//!
//! Both observers deliver batches of intersection entries. The selection is
//! computed here from the batch; the caller applies the resulting classes.

use crate::nav::anchor_target;

/// One entry from an intersection-observer batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sighting<'a> {
    pub section_id: &'a str,
    pub intersecting: bool,
}

/// Navigation links keyed by the section each one targets.
#[derive(Clone, Debug, Default)]
pub struct SectionLinks {
    targets: Vec<Option<String>>,
}

impl SectionLinks {
    pub fn from_hrefs<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let targets = hrefs
            .into_iter()
            .map(|h| h.and_then(|h| anchor_target(h.as_ref()).map(str::to_owned)))
            .collect();
        Self { targets }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// First link whose anchor names `section_id`.
    pub fn link_for_section(&self, section_id: &str) -> Option<usize> {
        self.targets
            .iter()
            .position(|t| t.as_deref() == Some(section_id))
    }

    /// Active link after a batch. Every intersecting entry clears the current
    /// link and then marks its own, so the last one in the batch wins. A batch
    /// with nothing intersecting leaves `current` alone.
    pub fn next_active(&self, current: Option<usize>, batch: &[Sighting<'_>]) -> Option<usize> {
        batch
            .iter()
            .filter(|s| s.intersecting)
            .fold(current, |_, s| self.link_for_section(s.section_id))
    }
}

/// Which observed elements have already faded in. Reveal is one-way.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Record a sighting of element `index`; true only the first time it
    /// intersects. Out-of-range indices are ignored.
    pub fn sighted(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if intersecting && !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}
