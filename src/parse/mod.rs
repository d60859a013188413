pub mod source;

pub use source::{Dialect, SourceTree};
