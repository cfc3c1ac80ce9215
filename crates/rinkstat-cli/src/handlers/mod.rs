mod context;

pub mod config;
pub mod export;
pub mod play;
pub mod replay;

pub use context::HandlerContext;
