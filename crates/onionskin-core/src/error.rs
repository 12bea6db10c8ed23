use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnionskinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for OnionskinError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OnionskinError>;
