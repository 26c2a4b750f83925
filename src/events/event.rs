use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadOpen {
    pub id: u64,
    /// Whether the sheet is attached to a visible anchor or centered
    pub anchored: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadClose {
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadPlace {
    pub id: u64,
    pub pos: [f32; 2],
    pub size: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    Open(PayloadOpen),
    Close(PayloadClose),
    Place(PayloadPlace),
}
