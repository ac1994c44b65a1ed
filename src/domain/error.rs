// Domain errors
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("expected a GeoJSON feature, got {0}")]
    NotAFeature(&'static str),

    #[error("circle feature {id:?} is malformed: {reason}")]
    MalformedCircle { id: Option<String>, reason: String },

    #[error("feature {id:?} has unsupported geometry {kind}")]
    UnsupportedGeometry { id: Option<String>, kind: &'static str },
}
