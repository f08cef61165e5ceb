use thiserror::Error;

use crate::buffer::Slot;

pub type Result<T, E = LatticeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("extent component {axis} is {value}, every component must be at least 1")]
    InvalidSize { axis: usize, value: i32 },

    #[error("extent {extent} holds more cells than can be addressed")]
    SizeOverflow { extent: String },

    #[error("component index {index} is out of range for a {dims}-dimensional coordinate")]
    InvalidCoordinateIndex { index: usize, dims: usize },

    #[error("cell factory failed for buffer {slot} at {pos}")]
    CellConstruction {
        slot: Slot,
        pos: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("cells cannot be removed through a neighbourhood")]
    UnsupportedIteratorMutation,
}
