//! Interactive terminal front end for the region selection flow

mod region_picker;
mod render;
mod retry_prompt;

pub use region_picker::{drive_region_prompt, PickerView, TerminalRegionPicker};
pub use render::{display_header, wizard_render_config};
pub use retry_prompt::PromptRetry;
