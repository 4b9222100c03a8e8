use std::collections::HashSet;

/// Which identity rows currently show their timestamp list.
///
/// Every label starts collapsed. Membership changes only through
/// [`ExpansionState::toggle`], or [`ExpansionState::reset`] when a new
/// result set replaces the old one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded.contains(label)
    }

    pub fn toggle(&mut self, label: &str) {
        if !self.expanded.remove(label) {
            self.expanded.insert(label.to_string());
        }
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn reset(&mut self) {
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_collapsed() {
        let state = ExpansionState::new();
        assert!(!state.is_expanded("Alice"));
        assert_eq!(state.expanded_count(), 0);
    }

    #[test]
    fn test_toggle_expands() {
        let mut state = ExpansionState::new();
        state.toggle("Alice");
        assert!(state.is_expanded("Alice"));
        assert!(!state.is_expanded("Bob"));
    }

    #[test]
    fn test_double_toggle_restores_collapsed() {
        let mut state = ExpansionState::new();
        state.toggle("Alice");
        state.toggle("Alice");
        assert!(!state.is_expanded("Alice"));
    }

    #[test]
    fn test_double_toggle_restores_expanded() {
        let mut state = ExpansionState::new();
        state.toggle("Alice");
        let before = state.clone();
        state.toggle("Alice");
        state.toggle("Alice");
        assert_eq!(state, before);
        assert!(state.is_expanded("Alice"));
    }

    #[test]
    fn test_labels_are_independent() {
        let mut state = ExpansionState::new();
        state.toggle("Alice");
        state.toggle("Bob");
        state.toggle("Alice");
        assert!(!state.is_expanded("Alice"));
        assert!(state.is_expanded("Bob"));
        assert_eq!(state.expanded_count(), 1);
    }

    #[test]
    fn test_reset_collapses_everything() {
        let mut state = ExpansionState::new();
        state.toggle("Alice");
        state.toggle("Bob");
        state.reset();
        assert_eq!(state.expanded_count(), 0);
        assert!(!state.is_expanded("Alice"));
    }
}
