//! Packing checklist logic: manual items, packed toggles and template loading.
//!
//! Duplicate suppression only applies to template loading. Manually added
//! items may repeat, and deleting an item needs no confirmation.

use log::info;
use shared::{PackingItem, PackingTemplate};

use super::models::ValidationError;
use super::trip_state::TripState;

#[derive(Debug, Clone, Default)]
pub struct PackingService;

impl PackingService {
    pub fn new() -> Self {
        Self
    }

    /// Append a trimmed item. Returns `None` (and changes nothing) when the
    /// text is blank.
    pub fn add_item(&self, state: &mut TripState, text: &str) -> Option<usize> {
        let item = text.trim();
        if item.is_empty() {
            return None;
        }

        state.record.packing.push(PackingItem::new(item));
        info!("Added packing item '{}'", item);
        Some(state.record.packing.len() - 1)
    }

    /// Flip the packed flag and return the new value
    pub fn toggle_packed(&self, state: &mut TripState, index: usize) -> Result<bool, ValidationError> {
        let entry = state
            .record
            .packing
            .get_mut(index)
            .ok_or(ValidationError::PackingItemNotFound(index))?;

        entry.packed = !entry.packed;
        info!("Marked '{}' as {}", entry.item, if entry.packed { "packed" } else { "not packed" });
        Ok(entry.packed)
    }

    pub fn delete_item(&self, state: &mut TripState, index: usize) -> Result<PackingItem, ValidationError> {
        if index >= state.record.packing.len() {
            return Err(ValidationError::PackingItemNotFound(index));
        }

        let removed = state.record.packing.remove(index);
        info!("Deleted packing item '{}'", removed.item);
        Ok(removed)
    }

    /// Insert every template item not already on the list (exact,
    /// case-sensitive match). Returns how many items were added.
    pub fn load_template(&self, state: &mut TripState, template: PackingTemplate) -> usize {
        let packing = &mut state.record.packing;
        let mut added = 0;

        for name in template.items() {
            if packing.iter().any(|existing| existing.item == *name) {
                continue;
            }
            packing.push(PackingItem::new(*name));
            added += 1;
        }

        info!("Loaded {} template: {} new items", template, added);
        added
    }

    /// `(packed, total)` item counts
    pub fn packing_progress(&self, state: &TripState) -> (usize, usize) {
        let packing = &state.record.packing;
        let packed = packing.iter().filter(|item| item.packed).count();
        (packed, packing.len())
    }
}
