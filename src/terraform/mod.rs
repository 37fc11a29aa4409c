pub mod error;
pub mod outputs;

pub use error::TerraformError;
pub use outputs::{fetch_outputs, InstanceTarget, Outputs};
