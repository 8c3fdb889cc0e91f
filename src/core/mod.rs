pub mod resolver;

pub use resolver::ResolvedPaths;
