use egui::{Area, Context, Frame, InnerResponse, Key, Order, ScrollArea, Ui};

use crate::{
    metadata::{reset_metadata, Metadata},
    settings::{SettingsInteraction, SettingsSheet},
    Positioner, Presentation,
};

#[cfg(feature = "events")]
use crate::events::{Event, EventSink, PayloadClose, PayloadOpen, PayloadPlace};

/// Floating sheet attached to the anchor captured by a [`Presentation`].
///
/// The sheet is drawn in a foreground [`egui::Area`]. Its width is fixed by
/// [`SettingsSheet`], its height is bounded and overflowing content scrolls.
/// Placement depends on the content size, which is only known after layout, so
/// every frame positions with the size measured on the previous one and asks
/// for a repaint when the size changes.
pub struct AnchoredSheet<'a> {
    presentation: &'a mut Presentation,
    settings_sheet: SettingsSheet,
    settings_interaction: SettingsInteraction,

    #[cfg(feature = "events")]
    events_sink: Option<&'a dyn EventSink>,
}

impl<'a> AnchoredSheet<'a> {
    pub fn new(presentation: &'a mut Presentation) -> Self {
        Self {
            presentation,
            settings_sheet: SettingsSheet::default(),
            settings_interaction: SettingsInteraction::default(),

            #[cfg(feature = "events")]
            events_sink: None,
        }
    }

    /// Makes sheet sizing configurable.
    pub fn with_settings(mut self, settings: &SettingsSheet) -> Self {
        self.settings_sheet = settings.clone();
        self
    }

    /// Makes dismiss behavior configurable.
    pub fn with_interactions(mut self, settings: &SettingsInteraction) -> Self {
        self.settings_interaction = settings.clone();
        self
    }

    /// Sends [`Event`]s about opening, placing and closing the sheet to `sink`.
    #[cfg(feature = "events")]
    pub fn with_event_sink(mut self, sink: &'a dyn EventSink) -> Self {
        self.events_sink = Some(sink);
        self
    }

    /// Draws the sheet if the presentation is open.
    pub fn show<R>(
        mut self,
        ctx: &Context,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> Option<InnerResponse<R>> {
        if !self.presentation.is_open() {
            return None;
        }

        let id = self.presentation.id();
        let mut meta = Metadata::new(id).load_for(ctx, self.presentation.generation());
        let frame_nr = ctx.cumulative_frame_nr();

        let screen = ctx.screen_rect();
        let viewport = screen.size();
        let anchor = self.presentation.anchor().copied();
        let alignment = self.presentation.alignment();

        let positioner = Positioner::new(self.settings_sheet.clone());
        let constraints = positioner.constraints(viewport, anchor.as_ref(), alignment);
        let content = constraints.clamp(meta.content_size_or(constraints.width()));
        let pos = positioner.position(viewport, content, anchor.as_ref(), alignment);

        #[cfg(feature = "events")]
        if meta.first_frame() {
            self.publish_event(Event::Open(PayloadOpen {
                id: id.value(),
                anchored: anchor.is_some_and(|a| a.is_on_screen(viewport)),
            }));
        }

        let res = Area::new(id.with("sheet_area"))
            .order(Order::Foreground)
            .fixed_pos(screen.min + pos.to_vec2())
            .constrain(false)
            .show(ctx, |ui| {
                ui.set_min_width(constraints.width());
                ui.set_max_width(constraints.width());
                ui.set_max_height(constraints.max_height());

                Frame::popup(ui.style())
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ScrollArea::vertical()
                            .max_height(ui.available_height())
                            .show(ui, add_contents)
                            .inner
                    })
                    .inner
            });

        let measured = res.response.rect.size();
        if meta.content_size != Some(measured) {
            ctx.request_repaint();
        }

        #[cfg(feature = "events")]
        if meta.last_pos != Some(pos) {
            self.publish_event(Event::Place(PayloadPlace {
                id: id.value(),
                pos: [pos.x, pos.y],
                size: [measured.x, measured.y],
            }));
        }

        // input of the frame that opened the sheet must not close it, this
        // frame may also run more than one pass
        let opened_frame = *meta.opened_frame.get_or_insert(frame_nr);
        let dismiss = frame_nr > opened_frame && self.dismiss_requested(ctx, &res);

        meta.content_size = Some(measured);
        meta.last_pos = Some(pos);

        if dismiss {
            self.presentation.dismiss();
            reset_metadata(ctx, id);

            #[cfg(feature = "events")]
            self.publish_event(Event::Close(PayloadClose { id: id.value() }));
        } else {
            meta.save(ctx);
        }

        Some(res)
    }

    fn dismiss_requested<R>(&self, ctx: &Context, res: &InnerResponse<R>) -> bool {
        let s = &self.settings_interaction;
        (s.dismiss_on_escape && ctx.input(|i| i.key_pressed(Key::Escape)))
            || (s.dismiss_on_click_outside && res.response.clicked_elsewhere())
    }

    #[cfg(feature = "events")]
    fn publish_event(&self, event: Event) {
        if let Some(sink) = self.events_sink {
            sink.send(event);
        }
    }
}
