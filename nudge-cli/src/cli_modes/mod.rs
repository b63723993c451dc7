mod cli_mode;
mod editor_mode;
mod editor_utils;
mod path_mode;
mod text_mode;
mod use_color;

pub use cli_mode::CliModeResult;
pub use editor_mode::editor_mode;
pub use path_mode::path_mode;
pub use text_mode::text_mode;
pub use use_color::use_color;
