pub mod cube;

pub use cube::{CubeSpec, Label, format_significant};
