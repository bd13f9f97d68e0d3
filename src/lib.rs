//! calicube - Generate labelled calibration cubes as STL or STEP files

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod generator;
pub mod geometry;
pub mod mesh;
pub mod step;
pub mod text;

pub use export::export_model;
pub use generator::generate_cube;
