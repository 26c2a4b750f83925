use egui::{Id, Pos2};

use crate::{
    anchor::{capture, AnchorLookup},
    observable::{Observable, SubscriptionId},
    AnchorSnapshot, SheetAlignment,
};

/// State of one sheet across presentations.
///
/// The anchor is measured once in [`Presentation::present`] and kept until
/// [`Presentation::dismiss`]; moving the anchor while the sheet is open does
/// not move the sheet.
#[derive(Debug)]
pub struct Presentation {
    id: Id,
    open: Observable<bool>,
    anchor: Option<AnchorSnapshot>,
    alignment: SheetAlignment,
    /// Incremented on every present, tells presentations of one sheet apart
    generation: u64,
}

impl Presentation {
    pub fn new(id: impl std::hash::Hash) -> Self {
        Self {
            id: Id::new(id),
            open: Observable::new(false),
            anchor: None,
            alignment: SheetAlignment::default(),
            generation: 0,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    pub fn anchor(&self) -> Option<&AnchorSnapshot> {
        self.anchor.as_ref()
    }

    pub fn alignment(&self) -> SheetAlignment {
        self.alignment
    }

    /// Number of times the sheet was presented.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Opens the sheet with the given anchor snapshot.
    ///
    /// Does nothing if already open, the first snapshot stays in place.
    pub fn present(&mut self, anchor: Option<AnchorSnapshot>, alignment: SheetAlignment) {
        if self.is_open() {
            return;
        }

        log::debug!("presenting sheet {:?}, anchor {anchor:?}", self.id);
        self.anchor = anchor;
        self.alignment = alignment;
        self.generation += 1;
        self.open.set(true);
    }

    /// Measures the anchor through `lookup` and opens the sheet.
    ///
    /// `origin` is the top-left corner of the viewport in screen coordinates.
    pub fn present_from<L: AnchorLookup + ?Sized>(
        &mut self,
        lookup: &L,
        anchor_id: Id,
        origin: Pos2,
        alignment: SheetAlignment,
    ) {
        if self.is_open() {
            return;
        }
        self.present(capture(lookup, anchor_id, origin), alignment);
    }

    pub fn dismiss(&mut self) {
        if !self.is_open() {
            return;
        }

        log::debug!("dismissing sheet {:?}", self.id);
        self.anchor = None;
        self.open.set(false);
    }

    /// Registers a callback called with the new open state on every change.
    pub fn on_open_changed(&mut self, callback: impl FnMut(&bool) + 'static) -> SubscriptionId {
        self.open.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.open.unsubscribe(id)
    }
}
