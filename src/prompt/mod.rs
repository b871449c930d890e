// Declare submodules
mod metadata;
mod transform;

pub use metadata::{metadata_prompt, METADATA_RUN_INSTRUCTIONS};
pub use transform::{transform_prompt, TRANSFORM_RUN_INSTRUCTIONS};
