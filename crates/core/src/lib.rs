pub mod config;
pub mod error;
pub mod kv;

pub use config::{Config, OverlapSetting};
pub use error::*;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
