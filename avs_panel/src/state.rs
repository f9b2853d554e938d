//! Pair-list state machine
//!
//! The ordered collection of find/replace pairs and every transition over
//! it. There is no separate selection state: every operation targets an
//! index or appends. Transitions report whether they applied so the
//! controller can issue exactly one persistence write per applied
//! transition and none for a no-op.

use avs_types::ReplacementPair;

/// Which field of a pair an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairField {
    Find,
    Replace,
}

/// Outcome of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The list changed; one persistence write is due
    Applied,
    /// Nothing changed; no write is due
    NoOp,
}

impl Transition {
    /// Returns true when the transition changed the list
    pub fn applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// Ordered pair list with its editing transitions
///
/// Invariant: the list is never empty. Whenever a transition would leave
/// it empty, the guard refills it with one blank pair before anything
/// else observes the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairListState {
    pairs: Vec<ReplacementPair>,
}

impl PairListState {
    /// Builds the list from persisted pairs, refilling if empty
    pub fn from_saved(pairs: Vec<ReplacementPair>) -> Self {
        let mut state = Self { pairs };
        state.refill_if_empty();
        state
    }

    /// Returns the pairs in order
    pub fn pairs(&self) -> &[ReplacementPair] {
        &self.pairs
    }

    /// Returns the number of pairs (always at least one)
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the pair at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<&ReplacementPair> {
        self.pairs.get(index)
    }

    /// Appends a blank pair
    pub fn add(&mut self) -> Transition {
        self.pairs.push(ReplacementPair::blank());
        Transition::Applied
    }

    /// Edits one field of the pair at `index`
    ///
    /// A stale index (the list was shortened since the edit started) is a
    /// silent no-op.
    pub fn edit(&mut self, index: usize, field: PairField, value: impl Into<String>) -> Transition {
        match self.pairs.get_mut(index) {
            Some(pair) => {
                match field {
                    PairField::Find => pair.find = value.into(),
                    PairField::Replace => pair.replace = value.into(),
                }
                Transition::Applied
            }
            None => Transition::NoOp,
        }
    }

    /// Removes the pair at `index` after an external confirmation
    ///
    /// Bounds are re-checked here, at apply time: a confirmation landing
    /// after the row is already gone is a no-op.
    pub fn delete_confirmed(&mut self, index: usize) -> Transition {
        if index >= self.pairs.len() {
            return Transition::NoOp;
        }
        self.pairs.remove(index);
        self.refill_if_empty();
        Transition::Applied
    }

    /// Moves the pair at `from` to position `to`
    ///
    /// `to` is evaluated against the list *after* removal (remove, then
    /// insert). Equal or out-of-range indices are a no-op.
    pub fn reorder(&mut self, from: usize, to: usize) -> Transition {
        let len = self.pairs.len();
        if from == to || from >= len || to >= len {
            return Transition::NoOp;
        }
        let pair = self.pairs.remove(from);
        self.pairs.insert(to, pair);
        Transition::Applied
    }

    fn refill_if_empty(&mut self) {
        if self.pairs.is_empty() {
            self.pairs.push(ReplacementPair::blank());
        }
    }
}
