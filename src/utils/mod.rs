pub mod env;
pub mod paths;
