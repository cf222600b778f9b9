pub mod measurements;
pub mod stations;
pub mod summary;

pub use measurements::*;
pub use stations::*;
pub use summary::*;
