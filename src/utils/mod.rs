pub mod layout;
pub mod path;

pub use layout::{center_rect, create_standard_layout, windowed_area};
pub use path::{get_config_dir, get_config_path, get_log_dir, get_preferences_path};
