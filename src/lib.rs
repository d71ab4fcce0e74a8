pub mod camera;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod flow;
pub mod input;
pub mod level;
