//! Drag Gesture State Machine
//!
//! Tracks a reorder drag across its start/move/end events. The machine
//! has two states, Idle and Dragging; a reorder is produced only on a
//! Dragging -> Idle transition with a recorded drop target. An
//! interrupted gesture (cancel, or an end without a matching start)
//! returns to Idle without producing a reorder.

/// State of an in-flight drag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Dragging the entry with `origin_id`; `drop_index` is the latest
    /// hovered target position, if any
    Dragging {
        origin_id: String,
        drop_index: Option<usize>,
    },
}

/// A completed drop: which entry to move and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDrop {
    pub origin_id: String,
    pub target_index: usize,
}

/// Reorder gesture tracker for one collection
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging the entry with `origin_id`. A second start while
    /// dragging restarts the gesture from the new origin.
    pub fn begin(&mut self, origin_id: impl Into<String>) {
        self.state = DragState::Dragging {
            origin_id: origin_id.into(),
            drop_index: None,
        };
    }

    /// Record the latest hovered drop position. Ignored while idle.
    pub fn hover(&mut self, index: usize) {
        if let DragState::Dragging { drop_index, .. } = &mut self.state {
            *drop_index = Some(index);
        }
    }

    /// Abort the gesture (pointer lost, escape). No reorder is produced.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// End the gesture. Returns the drop to apply if a drag was in
    /// progress and a target was recorded; otherwise `None`. An end
    /// without a matching start is a no-op.
    pub fn finish(&mut self) -> Option<PendingDrop> {
        let state = std::mem::take(&mut self.state);
        match state {
            DragState::Dragging {
                origin_id,
                drop_index: Some(target_index),
            } => Some(PendingDrop {
                origin_id,
                target_index,
            }),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }
}
