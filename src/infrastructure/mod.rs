pub mod filesystem;
pub mod hooks;
pub mod parser;
pub mod plugins;
pub mod repository;

#[cfg(test)]
pub mod test_utils;

pub use filesystem::*;
pub use hooks::*;
pub use parser::*;
pub use plugins::*;
pub use repository::*;
