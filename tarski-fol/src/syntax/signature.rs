/*! Defines a ['Sig'] to represent the signature of first-order theories.

['Sig']: crate::syntax::Sig
*/
use super::{Error, Pred, C, F};
use itertools::Itertools;
use std::{collections::HashSet, fmt};

/// Contains the signature information for a function.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FuncSig {
    /// Is the function symbol.
    pub symbol: F,

    /// Is the arity of the function.
    pub arity: usize,
}

impl fmt::Display for FuncSig {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "function: {}, arity: {}", self.symbol, self.arity)
    }
}

/// Contains the signature information for a predicate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PredSig {
    /// Is the predicate symbol.
    pub symbol: Pred,

    /// Is the arity of the predicate.
    pub arity: usize,
}

impl fmt::Display for PredSig {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "predicate: {}, arity: {}", self.symbol, self.arity)
    }
}

/// Is the kind of a symbol declared in a signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SymbolKind {
    Constant,
    Function,
    Relation,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Constant => write!(f, "constant"),
            Self::Function => write!(f, "function"),
            Self::Relation => write!(f, "relation"),
        }
    }
}

/// Is the signature of a first-order theory.
///
/// Symbol names are pairwise distinct across constants, functions and predicates, and every
/// function and predicate has a positive arity. Declaration order is preserved.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Sig {
    /// Is the constant symbols in a theory.
    constants: Vec<C>,

    /// Is the signature of functions in a theory.
    functions: Vec<FuncSig>,

    /// Is the signature of predicates in a theory.
    predicates: Vec<PredSig>,
}

impl Sig {
    /// Creates a signature from lists of constant, function and predicate names and the arities
    /// of the functions and predicates.
    ///
    /// **Example**:
    /// ```rust
    /// use tarski_fol::syntax::{Sig, SymbolKind};
    ///
    /// let sig = Sig::new(
    ///     vec!["0", "1"],
    ///     vec!["s", "c"],
    ///     vec!["<="],
    ///     vec![("s", 2), ("c", 1), ("<=", 2)],
    /// )
    /// .unwrap();
    /// assert_eq!(vec!["0", "1", "s", "c", "<="], sig.all_names());
    /// assert_eq!(SymbolKind::Function, sig.name_kind("c").unwrap());
    ///
    /// // `c` is missing an arity:
    /// let no_preds: Vec<&str> = vec![];
    /// let no_arities: Vec<(&str, usize)> = vec![];
    /// assert!(Sig::new(vec!["0"], vec!["c"], no_preds, no_arities).is_err());
    /// ```
    pub fn new<CS, FS, PS, AS, S>(
        constants: CS,
        functions: FS,
        predicates: PS,
        arities: AS,
    ) -> Result<Self, Error>
    where
        CS: IntoIterator,
        CS::Item: Into<C>,
        FS: IntoIterator,
        FS::Item: Into<F>,
        PS: IntoIterator,
        PS::Item: Into<Pred>,
        AS: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let arities: Vec<(String, usize)> = arities
            .into_iter()
            .map(|(name, arity)| (name.into(), arity))
            .collect();
        let mut seen = HashSet::new();
        for (name, _) in &arities {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateArity { name: name.clone() });
            }
        }

        let arity_of = |name: &str| {
            arities
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, arity)| *arity)
                .ok_or_else(|| Error::MissingArity {
                    name: name.to_string(),
                })
        };

        let mut sig = Self::new_empty();
        for constant in constants {
            sig.add_constant(constant.into())?;
        }
        for function in functions {
            let symbol: F = function.into();
            let arity = arity_of(symbol.name())?;
            sig.add_function(FuncSig { symbol, arity })?;
        }
        for predicate in predicates {
            let symbol: Pred = predicate.into();
            let arity = arity_of(symbol.name())?;
            sig.add_predicate(PredSig { symbol, arity })?;
        }

        if let Some((name, _)) = arities
            .iter()
            .find(|(name, _)| sig.arity(name).is_none())
        {
            return Err(Error::UnexpectedArity { name: name.clone() });
        }

        Ok(sig)
    }

    /// Creates an empty signature.
    pub fn new_empty() -> Self {
        Self {
            constants: Vec::new(),
            functions: Vec::new(),
            predicates: Vec::new(),
        }
    }

    /// Inserts a new constant in the receiver signature.
    pub fn add_constant(&mut self, constant: C) -> Result<(), Error> {
        self.check_fresh(constant.name())?;
        self.constants.push(constant);
        Ok(())
    }

    /// Adds the signature of a function to the receiver.
    pub fn add_function(&mut self, function: FuncSig) -> Result<(), Error> {
        self.check_fresh(function.symbol.name())?;
        if function.arity == 0 {
            return Err(Error::ZeroArity {
                name: function.symbol.to_string(),
            });
        }
        self.functions.push(function);
        Ok(())
    }

    /// Adds the signature of a predicate to the receiver.
    pub fn add_predicate(&mut self, predicate: PredSig) -> Result<(), Error> {
        self.check_fresh(predicate.symbol.name())?;
        if predicate.arity == 0 {
            return Err(Error::ZeroArity {
                name: predicate.symbol.to_string(),
            });
        }
        self.predicates.push(predicate);
        Ok(())
    }

    fn check_fresh(&self, name: &str) -> Result<(), Error> {
        if self.name_kind(name).is_ok() {
            Err(Error::DuplicateSymbol {
                name: name.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Returns the kind of the symbol named `name`.
    pub fn name_kind(&self, name: &str) -> Result<SymbolKind, Error> {
        if self.constants.iter().any(|c| c.name() == name) {
            Ok(SymbolKind::Constant)
        } else if self.functions.iter().any(|f| f.symbol.name() == name) {
            Ok(SymbolKind::Function)
        } else if self.predicates.iter().any(|p| p.symbol.name() == name) {
            Ok(SymbolKind::Relation)
        } else {
            Err(Error::UnknownSymbol {
                name: name.to_string(),
            })
        }
    }

    /// Returns the arity of the function or predicate named `name`. Constants and unknown names
    /// have no arity.
    pub fn arity(&self, name: &str) -> Option<usize> {
        self.functions
            .iter()
            .find(|f| f.symbol.name() == name)
            .map(|f| f.arity)
            .or_else(|| {
                self.predicates
                    .iter()
                    .find(|p| p.symbol.name() == name)
                    .map(|p| p.arity)
            })
    }

    /// Returns all symbol names: constants, then functions, then predicates, each in
    /// declaration order.
    pub fn all_names(&self) -> Vec<&str> {
        self.constants
            .iter()
            .map(|c| c.name())
            .chain(self.functions.iter().map(|f| f.symbol.name()))
            .chain(self.predicates.iter().map(|p| p.symbol.name()))
            .collect()
    }

    /// Returns the set of all symbol names.
    pub fn name_set(&self) -> HashSet<&str> {
        self.all_names().into_iter().collect()
    }

    /// Returns the constants of this signature.
    pub fn constants(&self) -> &[C] {
        &self.constants
    }

    /// Returns the functions of this signature.
    pub fn functions(&self) -> &[FuncSig] {
        &self.functions
    }

    /// Returns the predicates of this signature.
    pub fn predicates(&self) -> &[PredSig] {
        &self.predicates
    }
}

impl fmt::Display for Sig {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        writeln!(f, "constants: {}", self.constants.iter().join(", "))?;
        writeln!(
            f,
            "functions: {}",
            self.functions
                .iter()
                .map(|s| format!("{}/{}", s.symbol, s.arity))
                .join(", ")
        )?;
        write!(
            f,
            "predicates: {}",
            self.predicates
                .iter()
                .map(|s| format!("{}/{}", s.symbol, s.arity))
                .join(", ")
        )
    }
}
