// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.

use super::Message;
use crate::ui::gallery;
use crate::ui::window_metrics::WindowMetrics;
use iced::Task;

/// Mutable slices of `App` that message handling may touch.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub metrics: &'a mut WindowMetrics,
}

/// Applies one message. Every transition is synchronous, so no follow-up
/// task is ever produced.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(msg) => ctx.gallery.update(msg),
        Message::WindowResized(size) => {
            *ctx.metrics = WindowMetrics::from(size);
            tracing::trace!(width = size.width, height = size.height, "window metrics updated");
        }
    }
    Task::none()
}
