use egui::{Context, Id, Pos2, Vec2};
use serde::{Deserialize, Serialize};

const KEY_PREFIX: &str = "egui_anchored_sheet_metadata";

/// Per-sheet frame data stored in egui memory between frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Presentation the record belongs to, see [`crate::Presentation::generation`]
    pub generation: u64,
    /// Frame number the current presentation was first drawn on
    pub opened_frame: Option<u64>,
    /// Content size measured on the previous frame
    pub content_size: Option<Vec2>,
    /// Top left position used on the previous frame, viewport relative
    pub last_pos: Option<Pos2>,
    /// Custom key to identify the metadata
    id: Id,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            generation: 0,
            opened_frame: None,
            content_size: None,
            last_pos: None,
            id: Id::NULL,
        }
    }
}

impl Metadata {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn load(self, ctx: &Context) -> Self {
        ctx.data_mut(|data| {
            data.get_persisted::<Metadata>(self.get_key())
                .unwrap_or(self)
        })
    }

    pub fn save(self, ctx: &Context) {
        log::trace!("saving sheet metadata {:?}", self);
        ctx.data_mut(|data| {
            data.insert_persisted(self.get_key(), self);
        });
    }

    /// Loads the record of presentation `generation`.
    ///
    /// A record left by an earlier presentation is discarded, the sheet may
    /// have been dismissed by the host without the widget seeing it.
    pub fn load_for(self, ctx: &Context, generation: u64) -> Self {
        let id = self.id;
        let meta = self.load(ctx);
        if meta.generation == generation {
            return meta;
        }

        log::trace!("sheet {id:?} presented again, dropping stale metadata");
        Self {
            generation,
            ..Self::new(id)
        }
    }

    /// Whether the sheet was not drawn yet in the current presentation.
    pub fn first_frame(&self) -> bool {
        self.opened_frame.is_none()
    }

    /// Content size to position with on this frame.
    ///
    /// Before the first measurement the sheet is assumed to be `width` wide
    /// and empty.
    pub fn content_size_or(&self, width: f32) -> Vec2 {
        self.content_size.unwrap_or(Vec2::new(width, 0.))
    }

    /// Get key which is used to store metadata in egui cache.
    pub fn get_key(&self) -> Id {
        Id::new(KEY_PREFIX).with(self.id)
    }
}

/// Resets [`Metadata`] state
pub fn reset_metadata(ctx: &Context, id: Id) {
    Metadata::new(id).save(ctx);
}
