mod alignment;
mod anchor;
mod metadata;
mod observable;
mod positioner;
mod presentation;
mod settings;
mod sheet_view;

#[cfg(feature = "events")]
pub mod events;

pub use self::alignment::{fraction, AlignmentError, SheetAlignment};
pub use self::anchor::{capture, AnchorLookup, AnchorSnapshot};
pub use self::metadata::{reset_metadata, Metadata};
pub use self::observable::{Observable, SubscriptionId};
pub use self::positioner::{compute_constraints, compute_position, Positioner, SheetConstraints};
pub use self::presentation::Presentation;
pub use self::settings::{SettingsInteraction, SettingsSheet};
pub use self::sheet_view::AnchoredSheet;
