pub mod catalog;
pub mod executor;
pub mod keyword;
pub mod sample;
pub mod text;
pub mod tokenizer;

pub use catalog::{build_catalog, SymbolEntry};
pub use executor::{execute, run, Execution, Executor, Variables};
pub use keyword::Keyword;
pub use tokenizer::{classify, classify_with, Command, MatchPolicy};
