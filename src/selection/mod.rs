//! Client-side selection state
//!
//! Holds the gallery's toggles and the save button. While a save is in flight
//! the toggles are frozen, so the submitted payload always matches what is shown.

use crate::gallery::ToggleControl;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(String),
}

impl SaveState {
    /// Save button label.
    pub fn label(&self) -> &'static str {
        match self {
            SaveState::Idle => "Save Gradients",
            SaveState::Saving => "Saving...",
            SaveState::Saved => "Saved",
            SaveState::Failed(_) => "Save failed",
        }
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, SaveState::Saving)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    controls: Vec<ToggleControl>,
    save: SaveState,
}

impl Selection {
    pub fn new(controls: Vec<ToggleControl>) -> Self {
        Self {
            controls,
            save: SaveState::Idle,
        }
    }

    pub fn controls(&self) -> &[ToggleControl] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.controls.iter().filter(|c| c.checked).count()
    }

    pub fn save_state(&self) -> &SaveState {
        &self.save
    }

    /// Flip one control. Returns false when nothing changed.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.save.in_flight() {
            return false;
        }
        match self.controls.get_mut(index) {
            Some(c) => {
                c.checked = !c.checked;
                true
            }
            None => false,
        }
    }

    pub fn select_all(&mut self) -> bool {
        self.set_all(true)
    }

    pub fn deselect_all(&mut self) -> bool {
        self.set_all(false)
    }

    fn set_all(&mut self, checked: bool) -> bool {
        if self.save.in_flight() {
            return false;
        }
        for c in &mut self.controls {
            c.checked = checked;
        }
        true
    }

    /// slug -> {name, gradient} for every checked control, in gallery order.
    ///
    /// Controls sharing a slug collapse into one entry at the first position,
    /// holding the last control's values.
    pub fn checked_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        for c in self.controls.iter().filter(|c| c.checked) {
            payload.insert(
                c.slug.clone(),
                json!({ "name": c.name, "gradient": c.gradient }),
            );
        }
        payload
    }

    /// Enter the saving state and snapshot the payload.
    ///
    /// Returns `None` if a save is already running.
    pub fn begin_save(&mut self) -> Option<Map<String, Value>> {
        if self.save.in_flight() {
            return None;
        }
        self.save = SaveState::Saving;
        Some(self.checked_payload())
    }

    pub fn finish_save(&mut self, result: Result<(), String>) {
        self.save = match result {
            Ok(()) => SaveState::Saved,
            Err(e) => SaveState::Failed(e),
        };
    }
}
