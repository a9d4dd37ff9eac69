use thiserror::Error;

use crate::core::PointId;

pub type PlayAxisResult<T> = Result<T, PlayAxisError>;

#[derive(Debug, Error)]
pub enum PlayAxisError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// No points were available to group on the play axis.
    #[error("no data points to group on the play axis")]
    EmptyInput,

    /// Upstream selection delta marked one point both selected and deselected.
    #[error("point {point} is both newly selected and newly deselected in one selection delta")]
    ContradictorySelection { point: PointId },
}
