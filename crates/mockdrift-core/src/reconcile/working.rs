use serde_json::Value;

/// Endpoint list under review.
///
/// Accepting an endpoint the real side no longer has leaves a hole instead
/// of shifting later positions, so indices keep matching the diff records
/// until the review is over.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkingSet {
    slots: Vec<Option<Value>>,
}

impl WorkingSet {
    pub fn new(apis: &[Value]) -> Self {
        Self {
            slots: apis.iter().cloned().map(Some).collect(),
        }
    }

    /// Replace position `index` with `real`, or punch a hole when `real` is absent.
    ///
    /// Positions past the end are created as holes first.
    pub fn accept(&mut self, index: usize, real: Option<&Value>) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = real.cloned();
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn holes(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Endpoints in order with every hole removed
    pub fn into_pruned(self) -> Vec<Value> {
        self.slots.into_iter().flatten().collect()
    }
}
