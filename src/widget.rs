//! Widget trait and related types

use crate::event::Event;
use crate::geometry::{Layout, Limits};
use crate::renderer::Renderer;

/// The core widget trait the slider implements.
pub trait Widget<M> {
    /// Calculate the bounds this widget wants given the limits
    fn layout(&self, limits: &Limits) -> Layout;

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut dyn Renderer, layout: &Layout);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, layout: &Layout) -> Option<M> {
        let _ = (event, layout);
        None
    }
}
