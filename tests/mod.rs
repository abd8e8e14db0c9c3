pub mod convert;
pub mod macros;
pub mod traits;
pub mod types;
