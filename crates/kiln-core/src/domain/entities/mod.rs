pub mod artifact;

pub use artifact::{ArtifactSet, RelativePath};
