pub mod error;
pub mod footprint;
pub mod path;
