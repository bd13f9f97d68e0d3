use thiserror::Error;

use crate::geometry::FaceNormal;

/// Failures raised while modeling the cube
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("solid has no face with outward normal {0}")]
    FaceNotFound(FaceNormal),
    #[error("label {text:?} does not fit on the {normal} face")]
    LabelDoesNotFit { text: String, normal: FaceNormal },
    #[error("boolean cut of label {text:?} into the {normal} face failed")]
    BooleanFailed { text: String, normal: FaceNormal },
    #[error("tessellation produced no triangles")]
    EmptyMesh,
    #[error(transparent)]
    Modeling(#[from] truck_modeling::errors::Error),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
