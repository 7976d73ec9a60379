pub mod input;

pub use input::handle_input;
