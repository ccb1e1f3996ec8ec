use std::collections::BTreeMap;

use super::parts::{self, ComponentDescriptor, SLOTS};
use crate::error::{Error, Result};

/// EduGems granted when the circuit is completed.
pub const CIRCUIT_REWARD: u32 = 15;

pub const HINT: &str = "Electric current flows from the battery's positive terminal, \
through the circuit components, and back to the negative terminal. \
Place components in order: Power Source → Connection → Resistance → Load";

/// Placement state of the circuit board.
///
/// Completion is always recomputed from the full placement map. The reward
/// is all-or-nothing: it is set once on the transition into 100% and is
/// zero whenever the board is incomplete.
#[derive(Debug, Default)]
pub struct CircuitPuzzle {
    placements: BTreeMap<&'static str, &'static str>,
    dragged: Option<&'static str>,
    completion: u8,
    is_complete: bool,
    reward_granted: u32,
    celebration_pending: bool,
}

impl CircuitPuzzle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up a component. Unknown ids are ignored.
    pub fn begin_drag(&mut self, component_id: &str) {
        if let Err(e) = self.try_begin_drag(component_id) {
            tracing::debug!("ignoring drag: {}", e);
        }
    }

    pub fn try_begin_drag(&mut self, component_id: &str) -> Result<()> {
        let component =
            parts::component(component_id).ok_or_else(|| Error::InvalidComponentReference {
                component: component_id.to_string(),
            })?;
        self.dragged = Some(component.id);
        Ok(())
    }

    /// Put the carried component on a slot. Unknown slots are ignored.
    pub fn drop_on_slot(&mut self, slot_id: &str) {
        if let Err(e) = self.try_drop_on_slot(slot_id) {
            tracing::debug!("ignoring drop: {}", e);
        }
    }

    pub fn try_drop_on_slot(&mut self, slot_id: &str) -> Result<()> {
        let slot = parts::slot(slot_id).ok_or_else(|| Error::InvalidSlotReference {
            slot: slot_id.to_string(),
        })?;
        let Some(component_id) = self.dragged.take() else {
            return Ok(());
        };
        tracing::debug!(slot = slot.id, component = component_id, "placed component");
        self.placements.insert(slot.id, component_id);
        self.recompute();
        Ok(())
    }

    pub fn recompute(&mut self) {
        let correct = SLOTS
            .iter()
            .filter(|slot| self.is_slot_correct(slot.id))
            .count();
        self.completion = (correct * 100 / SLOTS.len()) as u8;

        if self.completion == 100 {
            if !self.is_complete {
                self.is_complete = true;
                self.reward_granted = CIRCUIT_REWARD;
                self.celebration_pending = true;
                tracing::info!("circuit complete, granted {} gems", CIRCUIT_REWARD);
            }
        } else {
            self.is_complete = false;
            self.reward_granted = 0;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::debug!("circuit reset");
    }

    pub fn is_component_placed(&self, component_id: &str) -> bool {
        self.placements.values().any(|id| *id == component_id)
    }

    pub fn component_in_slot(&self, slot_id: &str) -> Option<&'static ComponentDescriptor> {
        self.placements
            .get(slot_id)
            .and_then(|id| parts::component(id))
    }

    pub fn is_slot_correct(&self, slot_id: &str) -> bool {
        match (parts::slot(slot_id), self.component_in_slot(slot_id)) {
            (Some(slot), Some(component)) => slot.accepts == component.kind,
            _ => false,
        }
    }

    pub fn dragged(&self) -> Option<&'static str> {
        self.dragged
    }

    /// Put down whatever is being carried without placing it.
    pub fn cancel_drag(&mut self) {
        self.dragged = None;
    }

    pub fn placements(&self) -> &BTreeMap<&'static str, &'static str> {
        &self.placements
    }

    pub fn completion(&self) -> u8 {
        self.completion
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn reward_granted(&self) -> u32 {
        self.reward_granted
    }

    /// Returns true once per completion so the host can start the
    /// celebration sequence.
    pub fn take_celebration(&mut self) -> bool {
        std::mem::take(&mut self.celebration_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(puzzle: &mut CircuitPuzzle, component: &str, slot: &str) {
        puzzle.begin_drag(component);
        puzzle.drop_on_slot(slot);
    }

    fn solved() -> CircuitPuzzle {
        let mut puzzle = CircuitPuzzle::new();
        place(&mut puzzle, "battery1", "slot1");
        place(&mut puzzle, "wire1", "slot2");
        place(&mut puzzle, "resistor1", "slot3");
        place(&mut puzzle, "led1", "slot4");
        puzzle
    }

    fn assert_initial(puzzle: &CircuitPuzzle) {
        assert!(puzzle.placements().is_empty());
        assert_eq!(puzzle.completion(), 0);
        assert!(!puzzle.is_complete());
        assert_eq!(puzzle.reward_granted(), 0);
        assert_eq!(puzzle.dragged(), None);
    }

    #[test]
    fn test_new_puzzle_is_empty() {
        assert_initial(&CircuitPuzzle::new());
    }

    #[test]
    fn test_three_of_four_is_seventy_five_without_reward() {
        let mut puzzle = CircuitPuzzle::new();
        place(&mut puzzle, "battery1", "slot1");
        place(&mut puzzle, "wire1", "slot2");
        place(&mut puzzle, "resistor1", "slot3");

        assert_eq!(puzzle.completion(), 75);
        assert!(!puzzle.is_complete());
        assert_eq!(puzzle.reward_granted(), 0);
        assert!(!puzzle.take_celebration());
    }

    #[test]
    fn test_all_correct_grants_reward() {
        let mut puzzle = solved();
        assert_eq!(puzzle.completion(), 100);
        assert!(puzzle.is_complete());
        assert_eq!(puzzle.reward_granted(), CIRCUIT_REWARD);
        assert!(puzzle.take_celebration());
        assert!(!puzzle.take_celebration());
    }

    #[test]
    fn test_recompute_at_full_does_not_regrant() {
        let mut puzzle = solved();
        assert!(puzzle.take_celebration());
        puzzle.recompute();
        puzzle.recompute();
        assert_eq!(puzzle.reward_granted(), 15);
        assert!(puzzle.is_complete());
        assert!(!puzzle.take_celebration());

        // Dropping the same piece on the same slot again changes nothing.
        place(&mut puzzle, "led1", "slot4");
        assert_eq!(puzzle.reward_granted(), 15);
        assert!(!puzzle.take_celebration());
    }

    #[test]
    fn test_wrong_kind_is_placed_but_not_counted() {
        let mut puzzle = CircuitPuzzle::new();
        place(&mut puzzle, "battery1", "slot2");

        assert_eq!(puzzle.component_in_slot("slot2").map(|c| c.id), Some("battery1"));
        assert!(puzzle.is_component_placed("battery1"));
        assert!(!puzzle.is_slot_correct("slot2"));
        assert_eq!(puzzle.completion(), 0);

        place(&mut puzzle, "resistor1", "slot3");
        assert_eq!(puzzle.completion(), 25);
    }

    #[test]
    fn test_later_drop_overwrites_slot() {
        let mut puzzle = CircuitPuzzle::new();
        place(&mut puzzle, "led1", "slot1");
        place(&mut puzzle, "battery1", "slot1");

        assert_eq!(puzzle.placements().len(), 1);
        assert!(puzzle.is_slot_correct("slot1"));
        assert!(!puzzle.is_component_placed("led1"));
        assert_eq!(puzzle.completion(), 25);
    }

    #[test]
    fn test_breaking_a_solved_board_clears_reward() {
        let mut puzzle = solved();
        place(&mut puzzle, "led1", "slot1");

        // The same piece may occupy two slots; only the overwritten slot changes.
        let led_slots = puzzle
            .placements()
            .values()
            .filter(|id| **id == "led1")
            .count();
        assert_eq!(led_slots, 2);
        assert!(!puzzle.is_component_placed("battery1"));
        assert!(!puzzle.is_slot_correct("slot1"));
        assert!(puzzle.is_slot_correct("slot4"));

        assert_eq!(puzzle.completion(), 75);
        assert!(!puzzle.is_complete());
        assert_eq!(puzzle.reward_granted(), 0);
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut puzzle = CircuitPuzzle::new();
        puzzle.drop_on_slot("slot1");
        assert_initial(&puzzle);
    }

    #[test]
    fn test_drop_clears_dragged() {
        let mut puzzle = CircuitPuzzle::new();
        puzzle.begin_drag("wire1");
        assert_eq!(puzzle.dragged(), Some("wire1"));
        puzzle.drop_on_slot("slot2");
        assert_eq!(puzzle.dragged(), None);
        puzzle.drop_on_slot("slot3");
        assert_eq!(puzzle.placements().len(), 1);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut puzzle = CircuitPuzzle::new();
        puzzle.begin_drag("capacitor1");
        assert_eq!(puzzle.dragged(), None);

        puzzle.begin_drag("led1");
        puzzle.drop_on_slot("slot99");
        assert!(puzzle.placements().is_empty());
        assert_eq!(puzzle.dragged(), Some("led1"));
    }

    #[test]
    fn test_unknown_ids_report_errors() {
        let mut puzzle = CircuitPuzzle::new();
        assert!(matches!(
            puzzle.try_begin_drag("capacitor1"),
            Err(Error::InvalidComponentReference { .. })
        ));
        assert!(matches!(
            puzzle.try_drop_on_slot("slot99"),
            Err(Error::InvalidSlotReference { .. })
        ));
    }

    #[test]
    fn test_reset_after_completion() {
        let mut puzzle = solved();
        puzzle.begin_drag("wire1");
        puzzle.reset();
        assert_initial(&puzzle);
        assert!(!puzzle.take_celebration());
    }

    #[test]
    fn test_completion_matches_count_of_correct_slots() {
        let cases: [(&[(&str, &str)], u8); 4] = [
            (&[], 0),
            (&[("led1", "slot4")], 25),
            (&[("led1", "slot4"), ("wire1", "slot1")], 25),
            (&[("led1", "slot4"), ("wire1", "slot2")], 50),
        ];
        for (placements, expected) in cases {
            let mut puzzle = CircuitPuzzle::new();
            for (component, slot) in placements {
                place(&mut puzzle, component, slot);
            }
            assert_eq!(puzzle.completion(), expected, "{:?}", placements);
        }
    }
}
