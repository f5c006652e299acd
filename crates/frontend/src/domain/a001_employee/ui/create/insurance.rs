//! Insurance line items of the employee form
//!
//! Each slot owns its selection together with its own filter query, so
//! appending or removing a slot can never misalign the two.

use contracts::domain::common::Choice;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Selecting,
    Selected,
}

impl SlotState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Selecting => "selecting",
            Self::Selected => "selected",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InsuranceSlot {
    /// Stable identity for keyed rendering; positions shift on removal
    pub key: Uuid,
    pub selection: Option<Choice>,
    pub query: String,
}

impl InsuranceSlot {
    fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
            selection: None,
            query: String::new(),
        }
    }

    pub fn state(&self) -> SlotState {
        if !self.query.is_empty() {
            SlotState::Selecting
        } else if self.selection.is_some() {
            SlotState::Selected
        } else {
            SlotState::Empty
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsuranceEditor {
    slots: Vec<InsuranceSlot>,
}

impl InsuranceEditor {
    pub fn slots(&self) -> &[InsuranceSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the "No Insurance" placeholder should be shown
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InsuranceSlot> {
        self.slots.get(index)
    }

    pub fn position(&self, key: Uuid) -> Option<usize> {
        self.slots.iter().position(|s| s.key == key)
    }

    pub fn by_key(&self, key: Uuid) -> Option<&InsuranceSlot> {
        self.slots.iter().find(|s| s.key == key)
    }

    /// Add an empty slot at the end
    pub fn append(&mut self) -> Uuid {
        let slot = InsuranceSlot::new();
        let key = slot.key;
        self.slots.push(slot);
        key
    }

    /// Record the picked option; the slot's query is reset
    pub fn select(&mut self, index: usize, choice: Choice) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.selection = Some(choice);
                slot.query.clear();
                true
            }
            None => false,
        }
    }

    pub fn set_query(&mut self, index: usize, query: String) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.query = query;
                true
            }
            None => false,
        }
    }

    /// Delete a slot; later slots move one position up
    pub fn remove(&mut self, index: usize) -> Option<InsuranceSlot> {
        if index < self.slots.len() {
            Some(self.slots.remove(index))
        } else {
            None
        }
    }

    /// Ids of every slot with a picked reference option, in slot order
    pub fn selected_ids(&self) -> Vec<i64> {
        self.slots
            .iter()
            .filter_map(|s| s.selection.as_ref())
            .filter_map(|c| c.key.as_id())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insurance(id: i64) -> Choice {
        Choice::with_id(id, format!("Plan {}", id))
    }

    #[test]
    fn test_append_then_remove_only_slot() {
        let mut editor = InsuranceEditor::default();
        assert!(editor.is_empty());
        editor.append();
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.get(0).map(|s| s.state()), Some(SlotState::Empty));
        assert!(editor.remove(0).is_some());
        assert!(editor.is_empty());
    }

    #[test]
    fn test_remove_shifts_successors() {
        for n in 1..=5usize {
            for k in 0..n {
                let mut editor = InsuranceEditor::default();
                let keys: Vec<Uuid> = (0..n).map(|_| editor.append()).collect();
                for i in 0..n {
                    editor.select(i, insurance(i as i64 + 1));
                }

                editor.remove(k);

                assert_eq!(editor.len(), n - 1);
                let mut expected = keys.clone();
                expected.remove(k);
                let actual: Vec<Uuid> = editor.slots().iter().map(|s| s.key).collect();
                assert_eq!(actual, expected);
                if k + 1 < n {
                    assert_eq!(editor.get(k).map(|s| s.key), Some(keys[k + 1]));
                    assert_eq!(
                        editor.get(k).and_then(|s| s.selection.clone()),
                        Some(insurance(k as i64 + 2))
                    );
                }
            }
        }
    }

    #[test]
    fn test_slot_states() {
        let mut editor = InsuranceEditor::default();
        editor.append();
        editor.append();

        assert!(editor.set_query(0, "hea".to_string()));
        assert_eq!(editor.get(0).map(|s| s.state()), Some(SlotState::Selecting));
        assert_eq!(editor.get(1).map(|s| s.state()), Some(SlotState::Empty));

        assert!(editor.select(0, insurance(4)));
        assert_eq!(editor.get(0).map(|s| s.state()), Some(SlotState::Selected));
        assert_eq!(editor.get(0).map(|s| s.query.as_str()), Some(""));
        assert_eq!(editor.get(1).map(|s| s.state()), Some(SlotState::Empty));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut editor = InsuranceEditor::default();
        editor.append();
        assert!(!editor.select(3, insurance(1)));
        assert!(!editor.set_query(3, "x".to_string()));
        assert!(editor.remove(3).is_none());
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_selected_ids_skip_placeholders() {
        let mut editor = InsuranceEditor::default();
        editor.append();
        editor.append();
        editor.append();
        editor.select(0, insurance(8));
        editor.select(2, insurance(3));
        assert_eq!(editor.selected_ids(), vec![8, 3]);

        let key = editor.slots()[2].key;
        assert_eq!(editor.position(key), Some(2));
        editor.remove(0);
        assert_eq!(editor.position(key), Some(1));
        assert_eq!(editor.by_key(key).and_then(|s| s.selection.clone()), Some(insurance(3)));
    }
}
