pub mod errors;
pub mod filters;
pub mod models;
pub mod profile;
pub mod seed;
pub mod stats;
pub mod store;
pub mod upload;

pub use errors::*;
pub use filters::*;
pub use models::*;
pub use profile::*;
pub use stats::*;
pub use store::*;
pub use upload::*;
