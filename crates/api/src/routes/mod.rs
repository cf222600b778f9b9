pub mod api;
pub mod error;
pub mod home;

pub use api::*;
pub use error::ErrorResponse;
pub use home::*;
