mod swatch;
mod tool_button;

pub use swatch::ColorSwatch;
pub use tool_button::ToolButton;
