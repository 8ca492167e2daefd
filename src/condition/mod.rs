// src/condition/mod.rs

//! # Conditions
//!
//! A condition is a small boolean expression over the five stats, e.g.
//! `CON >= 10 and (pow + eye) >= 25` or `0 <= fb - brk < 3`.
//!
//! [`Condition::compile`] canonicalizes the stat aliases and parses the result
//! into an [`Expr`] tree exactly once; [`Condition::holds`] then evaluates that
//! tree against a [`Bindings`] table as many times as needed. Unknown names are
//! rejected at compile time, so evaluation can only fail on arithmetic (a
//! division or modulo by zero).
//!
//! The engine talks to conditions through [`StatCondition`], so callers can
//! plug in a plain closure instead of the built-in grammar.

pub mod alias;
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use alias::{STAT_COUNT, Stat, Vocabulary, canonicalize};
pub use ast::{Bindings, Expr, Value};
pub use error::ConditionError;

/// Anything that can decide whether a final stat line is favourable.
///
/// Implementations must be pure: same bindings, same answer.
pub trait StatCondition: Sync {
    fn holds(&self, stats: &Bindings) -> Result<bool, ConditionError>;
}

impl<F> StatCondition for F
where
    F: Fn(&Bindings) -> bool + Sync,
{
    fn holds(&self, stats: &Bindings) -> Result<bool, ConditionError> {
        Ok(self(stats))
    }
}

/// Longest condition text [`Condition::compile`] accepts, in bytes.
pub const MAX_SOURCE_LEN: usize = 4096;

/// A compiled condition.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    source: String,
    canonical: String,
    expr: Expr,
}

impl Condition {
    pub fn compile(source: &str) -> Result<Self, ConditionError> {
        if source.len() > MAX_SOURCE_LEN {
            return Err(ConditionError::TooLong { len: source.len(), limit: MAX_SOURCE_LEN });
        }
        let canonical = canonicalize(source);
        let tokens = lexer::tokenize(&canonical)?;
        let expr = parser::parse(&tokens)?;
        Ok(Self {
            source: source.to_string(),
            canonical,
            expr,
        })
    }

    /// Text as written by the caller.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Text after alias rewriting.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl StatCondition for Condition {
    #[inline]
    fn holds(&self, stats: &Bindings) -> Result<bool, ConditionError> {
        Ok(self.expr.eval(stats)?.truthy())
    }
}

impl std::str::FromStr for Condition {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::compile(s)
    }
}
