pub mod parser;
pub mod types;

// Re-export main types
pub use parser::{parse_candidate, ParseError};
pub use types::{ArbitraryValue, ParsedCandidate};
