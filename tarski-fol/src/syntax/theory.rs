/*! Defines theories: a signature together with a list of axioms. */

use super::{Expr, Sig};
use std::{fmt, ops::Deref};

/// Is a first-order theory, containing a signature and a list of axioms over it.
///
/// **Note**: axioms are not checked against the signature when a theory is created; a
/// structure is checked against both when a model is constructed for the theory.
#[derive(Clone, Debug)]
pub struct Theory {
    signature: Sig,
    axioms: Vec<Expr>,
}

impl Theory {
    /// Creates a theory with the given `axioms` over `signature`.
    pub fn new(axioms: Vec<Expr>, signature: Sig) -> Self {
        Self { signature, axioms }
    }

    /// Returns the signature of this theory.
    pub fn signature(&self) -> &Sig {
        &self.signature
    }

    /// Returns the axioms of this theory.
    pub fn axioms(&self) -> &[Expr] {
        &self.axioms
    }
}

impl Deref for Theory {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        &self.axioms
    }
}

impl fmt::Display for Theory {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let fs: Vec<String> = self.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", fs.join("\n"))
    }
}
