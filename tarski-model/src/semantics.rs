//! Provides the semantic counterparts of the syntax in `tarski_fol` and the evaluation of
//! expressions against them.
//!
//! ## Background
//! A *structure* for a signature consists of a finite, non-empty or empty, ordered universe of
//! [elements][Element] and an [interpretation][Interpretation] that gives every constant an
//! element, every function symbol a function over elements and every relation symbol a
//! relation over elements. Given an [assignment][Assignment] of elements to the free variables
//! of an expression, a term [evaluates][Evaluate] to an element and a formula evaluates to a
//! truth value, following Tarski's definition of truth:
//!
//! * ∃x φ is true if φ is true for *some* element bound to x;
//! * ∀x φ is true if φ is true for *every* element bound to x.
//!
//! Quantifiers are expanded by brute force over the universe, which is only practical because
//! universes are small and explicitly enumerated.
//!
//! A structure whose interpretation matches a theory's signature and in which every axiom of
//! the theory is true is a [model][Model] of the theory.
mod assignment;
mod evaluate;
mod interpretation;
mod model;
mod universe;

pub use assignment::Assignment;
pub use evaluate::Evaluate;
pub use interpretation::{Denotation, Function, Interpretation, Relation};
pub use model::Model;
pub use universe::Universe;

use std::fmt;
use tarski_fol::syntax::{Expr, SymbolKind};
use thiserror::Error;

/// Is the trait of values that can be elements of a universe. Elements are compared with
/// their own equality; no other capability is needed to evaluate expressions.
pub trait Element: Clone + PartialEq + fmt::Debug {}

impl<T: Clone + PartialEq + fmt::Debug> Element for T {}

/// Is the result of evaluating an expression: terms denote elements and formulae denote
/// truth values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value<E> {
    /// Is the element denoted by a term.
    Element(E),

    /// Is the truth value of a formula.
    Truth(bool),
}

impl<E> Value<E> {
    /// Returns the element of the receiver, if it is an element.
    pub fn element(self) -> Option<E> {
        match self {
            Self::Element(element) => Some(element),
            Self::Truth(_) => None,
        }
    }

    /// Returns the truth value of the receiver, if it is a truth value.
    pub fn truth(self) -> Option<bool> {
        match self {
            Self::Element(_) => None,
            Self::Truth(truth) => Some(truth),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Value<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Element(element) => write!(f, "{:?}", element),
            Self::Truth(truth) => write!(f, "{}", truth),
        }
    }
}

/// Is the type of errors arising from building structures, checking models and evaluating
/// expressions.
#[derive(Error, PartialEq, Eq, Debug)]
pub enum Error {
    /// Is returned when an element occurs more than once in a universe.
    #[error("element at position {index} repeats an earlier element of the universe")]
    DuplicateElement { index: usize },

    /// Is returned when the interpreted symbols differ from the symbols of a signature.
    #[error("interpretation does not match the signature (missing: [{}], extra: [{}])",
            .missing.join(", "),
            .extra.join(", "),
    )]
    InterpretationMismatch {
        missing: Vec<String>,
        extra: Vec<String>,
    },

    /// Is returned when a symbol is interpreted as something other than what it was declared
    /// or used as.
    #[error("symbol `{symbol}` is a {expected} but is interpreted as a {found}")]
    KindMismatch {
        symbol: String,
        expected: SymbolKind,
        found: SymbolKind,
    },

    /// Is returned when the arity of an interpretation disagrees with a declared arity or with
    /// the number of arguments of an application.
    #[error("symbol `{symbol}` takes {expected} argument(s) but {found} were given")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    /// Is returned when an axiom of a theory is false in a candidate model.
    #[error("axiom `{axiom}` does not hold")]
    AxiomViolation { axiom: Expr },

    /// Is returned when a variable is not bound by the assignment.
    #[error("variable `{variable}` is not bound")]
    UnboundVariable { variable: String },

    /// Is returned when a symbol has no interpretation.
    #[error("symbol `{symbol}` is not interpreted")]
    UnknownInterpretationKey { symbol: String },

    /// Is returned when a formula is used where an element is expected.
    #[error("`{expression}` is a formula, not a term")]
    NotATerm { expression: String },

    /// Is returned when a term is used where a truth value is expected.
    #[error("`{expression}` is a term, not a formula")]
    NotAFormula { expression: String },

    /// Is returned when the empty placeholder expression is evaluated.
    #[error("cannot evaluate the empty expression")]
    EmptyExpressionEvaluated,
}
