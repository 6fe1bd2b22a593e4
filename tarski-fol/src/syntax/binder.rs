/*! Binds the symbols of a [`Sig`] to expression builders.

[`Sig`]: crate::syntax::Sig
*/
use super::{Error, Expr, FuncSig, PredSig, Sig, SymbolKind, C};
use std::{collections::HashMap, slice};

/// Builds expressions for one symbol of a signature.
#[derive(Clone, Debug)]
pub enum SymbolBuilder {
    /// Is the builder of a constant, holding its (only) expression.
    Constant(Expr),

    /// Is the builder of function applications.
    Function(FuncSig),

    /// Is the builder of atomic formulae.
    Relation(PredSig),
}

impl SymbolBuilder {
    /// Returns the name of the symbol of the receiver.
    pub fn name(&self) -> &str {
        match self {
            Self::Constant(expr) => expr.name().unwrap_or_default(),
            Self::Function(sig) => sig.symbol.name(),
            Self::Relation(sig) => sig.symbol.name(),
        }
    }

    /// Returns the kind of the symbol of the receiver.
    pub fn kind(&self) -> SymbolKind {
        match self {
            Self::Constant(_) => SymbolKind::Constant,
            Self::Function(_) => SymbolKind::Function,
            Self::Relation(_) => SymbolKind::Relation,
        }
    }

    /// Returns the number of arguments that the receiver accepts; zero for constants.
    pub fn arity(&self) -> usize {
        match self {
            Self::Constant(_) => 0,
            Self::Function(sig) => sig.arity,
            Self::Relation(sig) => sig.arity,
        }
    }

    /// Applies the receiver on `terms`. The number of terms must be equal to the declared
    /// arity of the symbol; a constant accepts no terms and returns its constant expression.
    pub fn app(&self, terms: Vec<Expr>) -> Result<Expr, Error> {
        if terms.len() != self.arity() {
            return Err(Error::ArityMismatch {
                symbol: self.name().to_string(),
                expected: self.arity(),
                found: terms.len(),
            });
        }

        Ok(match self {
            Self::Constant(expr) => expr.clone(),
            Self::Function(sig) => sig.symbol.clone().app(terms),
            Self::Relation(sig) => sig.symbol.clone().app(terms),
        })
    }

    /// Returns the expression of a constant symbol.
    pub fn app0(&self) -> Result<Expr, Error> {
        self.app(vec![])
    }

    /// Applies the (unary) receiver on a term.
    pub fn app1(&self, first: &Expr) -> Result<Expr, Error> {
        self.app(vec![first.clone()])
    }

    /// Applies the (binary) receiver on two terms.
    pub fn app2(&self, first: &Expr, second: &Expr) -> Result<Expr, Error> {
        self.app(vec![first.clone(), second.clone()])
    }

    /// Applies the (ternary) receiver on three terms.
    pub fn app3(&self, first: &Expr, second: &Expr, third: &Expr) -> Result<Expr, Error> {
        self.app(vec![first.clone(), second.clone(), third.clone()])
    }
}

/// Is the collection of builders for every symbol of a signature, kept in the order of
/// [`Sig::all_names`].
///
/// [`Sig::all_names`]: crate::syntax::Sig::all_names()
#[derive(Clone, Debug)]
pub struct Symbols {
    builders: Vec<SymbolBuilder>,
    index: HashMap<String, usize>,
}

impl Symbols {
    /// Returns the builder of the symbol named `name`.
    pub fn get(&self, name: &str) -> Result<&SymbolBuilder, Error> {
        self.index
            .get(name)
            .map(|&i| &self.builders[i])
            .ok_or_else(|| Error::UnknownSymbol {
                name: name.to_string(),
            })
    }

    /// Returns the constant expression of the symbol named `name`.
    pub fn constant(&self, name: &str) -> Result<Expr, Error> {
        self.get(name)?.app0()
    }

    /// Returns an iterator over the builders in declaration order.
    pub fn iter(&self) -> slice::Iter<SymbolBuilder> {
        self.builders.iter()
    }

    /// Returns the number of builders.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Returns true if the signature had no symbols.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl IntoIterator for Symbols {
    type Item = SymbolBuilder;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.builders.into_iter()
    }
}

impl<'a> IntoIterator for &'a Symbols {
    type Item = &'a SymbolBuilder;

    type IntoIter = slice::Iter<'a, SymbolBuilder>;

    fn into_iter(self) -> Self::IntoIter {
        self.builders.iter()
    }
}

/// Returns a builder for every symbol of `sig`: constants yield their constant expression,
/// functions and predicates yield applications that are checked against the declared arity.
///
/// **Example**:
/// ```rust
/// use tarski_fol::syntax::{bind_symbols, Expr, Sig};
///
/// let sig = Sig::new(vec!["0"], vec!["clamp"], vec!["<="], vec![("clamp", 3), ("<=", 2)]).unwrap();
/// let symbols = bind_symbols(&sig);
///
/// let (x, y, z) = (Expr::var("x"), Expr::var("y"), Expr::var("z"));
/// let clamp = symbols.get("clamp").unwrap();
/// let leq = symbols.get("<=").unwrap();
///
/// let term = clamp.app3(&x, &y, &z).unwrap();
/// assert_eq!("clamp(x, y, z)", term.to_string());
/// assert_eq!("<=(0, clamp(x, y, z))", leq.app2(&symbols.constant("0").unwrap(), &term).unwrap().to_string());
///
/// // too few arguments:
/// assert!(clamp.app2(&x, &y).is_err());
/// ```
pub fn bind_symbols(sig: &Sig) -> Symbols {
    let builders: Vec<SymbolBuilder> = sig
        .constants()
        .iter()
        .map(|c| SymbolBuilder::Constant(Expr::from(C::clone(c))))
        .chain(sig.functions().iter().cloned().map(SymbolBuilder::Function))
        .chain(sig.predicates().iter().cloned().map(SymbolBuilder::Relation))
        .collect();
    let index = builders
        .iter()
        .enumerate()
        .map(|(i, b)| (b.name().to_string(), i))
        .collect();

    Symbols { builders, index }
}
