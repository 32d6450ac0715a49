pub mod settings;

pub use settings::{AppConfig, ContactConfig, ServerConfig, ThemeConfig};
