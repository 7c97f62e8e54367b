//! Claim datasets
//!
//! Loading, indexing and generating the source × variable claim matrices the
//! algorithms run on.

mod csv;
pub mod index;
pub mod matrix;
pub mod supervised;
pub mod synthetic;

pub use index::{Claim, ClaimId, ClaimIndex};
pub use matrix::MatrixDataset;
pub use supervised::SupervisedData;
pub use synthetic::SyntheticData;
