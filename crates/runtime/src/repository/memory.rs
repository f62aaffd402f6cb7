//! In-memory action source for tests and tools.

use std::collections::VecDeque;

use crate::api::{Result, RuntimeError};

use super::{ActionRecord, ActionSource};

/// Serves pre-built records in order.
#[derive(Clone, Debug, Default)]
pub struct InMemoryActionSource {
    records: VecDeque<ActionRecord>,
}

impl InMemoryActionSource {
    pub fn new(records: impl IntoIterator<Item = ActionRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Appends a record behind everything not yet consumed.
    pub fn push(&mut self, record: ActionRecord) {
        self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ActionSource for InMemoryActionSource {
    fn has_another_action(&self) -> bool {
        !self.records.is_empty()
    }

    fn next_action(&mut self) -> Result<ActionRecord> {
        self.records
            .pop_front()
            .ok_or(RuntimeError::SourceExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActionType;

    #[test]
    fn yields_in_order_then_exhausts() {
        let mut source = InMemoryActionSource::new([
            ActionRecord::new("d1", "Ryan", ActionType::Move, "a2", ""),
            ActionRecord::new("d1", "Beyer", ActionType::Upgrade, "", ""),
        ]);
        source.push(ActionRecord::new("d2", "Ryan", ActionType::Trade, "", "3"));
        assert_eq!(source.len(), 3);

        let actors: Vec<String> = std::iter::from_fn(|| {
            source
                .has_another_action()
                .then(|| source.next_action().unwrap().actor)
        })
        .collect();
        assert_eq!(actors, ["Ryan", "Beyer", "Ryan"]);

        assert!(source.is_empty());
        assert!(matches!(
            source.next_action(),
            Err(RuntimeError::SourceExhausted)
        ));
    }
}
