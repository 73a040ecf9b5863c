pub mod files;
pub mod settings;

pub use files::{config_file, ensure_taskdesk_dir, logs_dir};
pub use settings::{load_config, save_config, Config};
