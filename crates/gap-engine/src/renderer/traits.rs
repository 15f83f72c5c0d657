//! Renderer contract.
//!
//! The engine never draws. Once per render callback the game loop hands the
//! current [`BoardView`] to a `Renderer`, which may be a canvas painter on the
//! host side, the flat frame buffer in [`crate::bridge`], or a test probe.

use super::view::BoardView;

pub trait Renderer {
    fn draw(&mut self, view: &BoardView<'_>);
}

/// Renderer that draws nothing. Useful for headless simulation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _view: &BoardView<'_>) {}
}
