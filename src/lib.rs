pub mod config;
pub mod feed;
pub mod http;
pub mod odds;
pub mod store;
pub mod sync;
