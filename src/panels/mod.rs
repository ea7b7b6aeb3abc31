mod central_panel;
mod color_picker;
mod history_panel;
mod layers_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use color_picker::color_picker_window;
pub use history_panel::history_panel;
pub use layers_panel::layers_panel;
pub use tools_panel::tools_panel;
