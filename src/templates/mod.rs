pub mod layout;
pub mod components;
pub mod pages;
pub mod rich_text;

pub use layout::*;
pub use components::*;
pub use pages::*;
pub use rich_text::render_rich_text;
