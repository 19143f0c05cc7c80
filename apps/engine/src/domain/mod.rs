//! Domain layer: pure symbol, rotation and evaluation logic.

pub mod catalog;
pub mod navigation;
pub mod outcome;
pub mod symbol;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_navigation;
#[cfg(test)]
mod tests_props_outcome;

// Re-exports for ergonomics
pub use catalog::SymbolCatalog;
pub use navigation::{rotate, Direction};
pub use outcome::{evaluate, Outcome};
pub use symbol::{canonical_name, Symbol, FINGERSPELLING_ALPHABET};
