//! Domain logic - pure versioning rules independent of file I/O

pub mod operation;
pub mod prerelease;
pub mod version;

pub use operation::{Operation, OperationRequest, Phase};
pub use version::BumpPart;
