pub mod builder;
pub mod stl;
pub mod tessellate;
pub mod validation;

pub use builder::{MeshBuilder, Triangle};
pub use stl::{estimate_stl_size, write_stl};
pub use tessellate::tessellate;
pub use validation::{ValidationReport, validate_and_fix};
