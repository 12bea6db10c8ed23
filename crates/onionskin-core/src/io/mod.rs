pub mod composite;
pub mod image_io;
