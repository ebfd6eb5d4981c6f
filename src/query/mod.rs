//! Query parsing and term matching.

pub mod fuzzy;
pub mod matcher;
pub mod parser;

pub use self::fuzzy::{FuzzyHit, FuzzyMatcher};
pub use self::matcher::{DocumentMatch, Matcher, TermMatches};
pub use self::parser::{ParsedQuery, QueryParser};
