use std::collections::BTreeSet;

// Revealed regions never un-reveal; repeated intersection of an already
// visible region must not retrigger its entrance animation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    revealed: BTreeSet<String>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, region_id: &str) -> bool {
        if self.revealed.contains(region_id) {
            return false;
        }
        self.revealed.insert(region_id.to_string())
    }

    pub fn contains(&self, region_id: &str) -> bool {
        self.revealed.contains(region_id)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.revealed.iter().map(String::as_str)
    }
}
