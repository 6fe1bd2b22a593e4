/*! Defines an abstract syntax tree for first-order terms and formulae with equality, together with
signatures, symbol binders and theories. */

mod binder;
mod expr;
#[macro_use]
mod macros;
mod signature;
mod symbol;
mod theory;

pub use binder::{bind_symbols, SymbolBuilder, Symbols};
pub use expr::{exists, forall, not, Expr, ExprKind};
pub use signature::{FuncSig, PredSig, Sig, SymbolKind};
pub use symbol::{Pred, C, F, LEQ_SYM, V};
pub use theory::Theory;

use thiserror::Error;

/// Is the type of errors arising from declaring signatures and building expressions.
#[derive(Error, PartialEq, Eq, Debug)]
pub enum Error {
    /// Is returned when a symbol name is declared more than once in a signature.
    #[error("symbol `{name}` is declared more than once")]
    DuplicateSymbol { name: String },

    /// Is returned when a function or relation symbol has no arity.
    #[error("no arity is declared for `{name}`")]
    MissingArity { name: String },

    /// Is returned when more than one arity is given for the same name.
    #[error("arity of `{name}` is declared more than once")]
    DuplicateArity { name: String },

    /// Is returned when an arity is given for a name that is neither a function nor a relation.
    #[error("arity is declared for `{name}`, which is not a function or a relation")]
    UnexpectedArity { name: String },

    /// Is returned when a function or relation is declared with arity zero.
    #[error("arity of `{name}` must be positive")]
    ZeroArity { name: String },

    /// Is returned when a name is looked up in a signature that does not declare it.
    #[error("symbol `{name}` is not in the signature")]
    UnknownSymbol { name: String },

    /// Is returned when a quantifier is asked to bind an expression that is not a variable.
    #[error("cannot quantify over `{expression}`, which is not a variable")]
    NotAVariable { expression: String },

    /// Is returned when a symbol is applied to the wrong number of arguments.
    #[error("symbol `{symbol}` takes {expected} argument(s) but {found} were given")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },
}
