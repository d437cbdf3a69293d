// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod item;
pub mod parser;

// Re-export types so code using `crate::model::Event` works
pub use item::{DateKey, Event};
pub use parser::FormInput;
