use super::Event;

/// Receiver side of sheet events.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        // receiver may be gone, events are best effort
        let _ = crossbeam::channel::Sender::send(self, event);
    }
}
