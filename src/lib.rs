pub mod config;
pub mod header;
pub mod readme;
pub mod stamp;
pub mod version;
