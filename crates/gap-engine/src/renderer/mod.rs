pub mod traits;
pub mod view;

pub use traits::{NullRenderer, Renderer};
pub use view::BoardView;
