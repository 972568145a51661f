pub mod backup;
pub mod controller;
pub mod export;
pub mod kv;
pub mod log;
pub mod store;
pub mod theme;
pub mod validate;
