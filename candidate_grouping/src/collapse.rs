use std::collections::HashSet;

use log::debug;

/// The group labels the user has closed.
///
/// Keyed by label text only, so an entry survives regrouping as long as the
/// label is produced again. Labels that no longer match a group are inert.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct CollapseSet {
    labels: HashSet<String>,
}

impl CollapseSet {
    pub fn new() -> CollapseSet {
        CollapseSet::default()
    }

    /// Collapses an expanded label, expands a collapsed one.
    /// Returns true if the label is now collapsed.
    pub fn toggle(&mut self, label: &str) -> bool {
        let collapsed = if self.labels.remove(label) {
            false
        } else {
            self.labels.insert(label.to_string());
            true
        };
        debug!("CollapseSet::toggle: {:?} collapsed: {}", label, collapsed);
        collapsed
    }

    pub fn is_collapsed(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The collapsed labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut res: Vec<&str> = self.labels.iter().map(|s| s.as_str()).collect();
        res.sort_unstable();
        res
    }
}

impl<S: AsRef<str>> FromIterator<S> for CollapseSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        CollapseSet {
            labels: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_expands() {
        let mut cs = CollapseSet::new();
        assert!(cs.toggle("Senate"));
        assert!(cs.is_collapsed("Senate"));
        assert!(!cs.toggle("Senate"));
        assert!(!cs.is_collapsed("Senate"));
        assert!(cs.is_empty());
    }

    #[test]
    fn stale_labels_are_kept() {
        let mut cs: CollapseSet = ["Texas - TX", "Local"].iter().collect();
        assert_eq!(cs.len(), 2);
        assert!(cs.is_collapsed("Local"));
        assert!(!cs.is_collapsed("Ohio - OH"));
        assert_eq!(cs.labels(), vec!["Local", "Texas - TX"]);
        cs.clear();
        assert!(!cs.is_collapsed("Local"));
    }
}
