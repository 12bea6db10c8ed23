pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod io;
pub mod render;
pub mod shell;
pub mod state;
pub mod timing;
