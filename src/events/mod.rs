mod event;
mod sink;

pub use event::{Event, PayloadClose, PayloadOpen, PayloadPlace};

pub use sink::EventSink;
