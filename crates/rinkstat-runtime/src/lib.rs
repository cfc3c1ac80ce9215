pub mod config;
pub mod error;
pub mod import;
pub mod log;
pub mod observer;
pub mod session;

pub use config::{Config, Labels, resolve_config_path};
pub use error::{Error, Result};
pub use import::{parse_events, read_events};
pub use log::EventLog;
pub use observer::SessionObserver;
pub use session::Session;
