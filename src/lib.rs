pub mod config;
pub mod demo;
pub mod option;

pub use option::Option;
