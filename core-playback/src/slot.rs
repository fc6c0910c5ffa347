//! The single backend slot the façade plays through.

use bridge_traits::AssetId;
use parking_lot::Mutex;

/// What the façade last did to the slot.
///
/// This is bookkeeping only. The backend owns the real resource and may have
/// dropped it on its own (end of stream, audio focus loss), so commands are
/// always sent regardless of this state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    /// Nothing loaded, or the last unload succeeded.
    Empty,
    /// The backend accepted a preload of `url`.
    Loaded { url: String },
}

/// Handle to the one named asset slot in the native backend.
///
/// At most one asset lives in the slot; loading a new one supersedes the
/// previous asset.
#[derive(Debug)]
pub struct TrackSlot {
    id: AssetId,
    state: Mutex<SlotState>,
}

impl TrackSlot {
    pub fn new(id: AssetId) -> Self {
        Self {
            id,
            state: Mutex::new(SlotState::Empty),
        }
    }

    pub fn id(&self) -> &AssetId {
        &self.id
    }

    pub fn state(&self) -> SlotState {
        self.state.lock().clone()
    }

    /// URL of the asset the slot was last loaded with.
    pub fn loaded_url(&self) -> Option<String> {
        match &*self.state.lock() {
            SlotState::Loaded { url } => Some(url.clone()),
            SlotState::Empty => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.state.lock(), SlotState::Loaded { .. })
    }

    pub(crate) fn mark_loaded(&self, url: impl Into<String>) {
        *self.state.lock() = SlotState::Loaded { url: url.into() };
    }

    pub(crate) fn mark_empty(&self) {
        *self.state.lock() = SlotState::Empty;
    }
}
