pub mod bounds;
pub mod engrave;
pub mod frame;
pub mod solid;

pub use bounds::BoundingBox;
pub use engrave::engrave;
pub use frame::{FaceFrame, FaceNormal, Vec3};
pub use solid::{FacePlacement, Solid, bounding_box, cube, is_closed, select_face, translated};
