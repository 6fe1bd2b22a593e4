/*! Defines the symbols of ['V'], ['C'], ['F'] and ['Pred'] for making terms and formulae.

['V']: crate::syntax::V
['C']: crate::syntax::C
['F']: crate::syntax::F
['Pred']: crate::syntax::Pred
*/

use super::{Expr, ExprKind};
use std::fmt;

/// Relation symbol of the built-in partial-order shortcut, [`Expr::leq`].
///
/// [`Expr::leq`]: crate::syntax::Expr::leq()
pub const LEQ_SYM: &str = "<=";

/// Represents a function symbol with a given name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct F(pub String);

impl F {
    /// Returns the name of the receiver.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a list of terms.
    ///
    /// **Note**: the arity of `F` is not known on its own; use a [`SymbolBuilder`] bound to a
    /// signature to get applications that are checked against the declared arity.
    ///
    /// [`SymbolBuilder`]: crate::syntax::SymbolBuilder
    pub fn app(self, terms: Vec<Expr>) -> Expr {
        Expr::new(ExprKind::App {
            function: self,
            terms,
        })
    }
}

impl<S: Into<String>> From<S> for F {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a variable symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct V(pub String);

impl V {
    /// Returns the name of the receiver.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for V {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a constant symbol with a given name.
///
/// **Note**: nullary functions are not constants; a signature declares constants separately
/// and every function symbol has a positive arity.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct C(pub String);

impl C {
    /// Returns the name of the receiver.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for C {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents a relation (predicate) symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Pred(pub String);

impl Pred {
    /// Returns the name of the receiver.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a list of terms, returning an atomic formula.
    ///
    /// **Note**: like [`F::app`], the number of `terms` is not checked.
    ///
    /// [`F::app`]: crate::syntax::F::app()
    pub fn app(self, terms: Vec<Expr>) -> Expr {
        Expr::new(ExprKind::Atom {
            predicate: self,
            terms,
        })
    }
}

impl<S: Into<String>> From<S> for Pred {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
