/// Reference trace loading and parsing.
pub mod loader;
