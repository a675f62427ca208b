mod component;
mod layout;
mod render;
mod state;

pub use component::MstCanvas;
