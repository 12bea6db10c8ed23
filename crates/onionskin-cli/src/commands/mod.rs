pub mod composite;
pub mod config;
pub mod info;
pub mod place;
