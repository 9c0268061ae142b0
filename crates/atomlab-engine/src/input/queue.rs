/// UI events the lab understands.
/// The browser layer translates DOM events into these; nothing here knows
/// about drag-and-drop mechanics or form widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum LabEvent {
    /// The search box text changed.
    SearchChanged(String),
    /// A category filter chip was picked (a `filter_options()` label).
    FilterSelected(String),
    /// An element tile was clicked.
    SelectElement(u32),
    /// The detail panel was closed.
    CloseSelection,
    /// An atom with this symbol was dropped onto the bonding workspace.
    AtomDropped(String),
    /// The "clear workspace" button was pressed.
    ClearWorkspace,
}

/// A queue of UI events.
/// JS pushes events; the lab drains and applies them in arrival order.
pub struct LabEventQueue {
    events: Vec<LabEvent>,
}

impl LabEventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: LabEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<LabEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &LabEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for LabEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = LabEventQueue::new();
        q.push(LabEvent::SearchChanged("fe".into()));
        q.push(LabEvent::ClearWorkspace);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn preserves_arrival_order() {
        let mut q = LabEventQueue::new();
        q.push(LabEvent::AtomDropped("Na".into()));
        q.push(LabEvent::AtomDropped("Cl".into()));
        let symbols: Vec<&LabEvent> = q.iter().collect();
        assert_eq!(symbols[0], &LabEvent::AtomDropped("Na".into()));
        assert_eq!(symbols[1], &LabEvent::AtomDropped("Cl".into()));
        assert_eq!(q.len(), 2);
    }
}
