use super::Element;
use itertools::Itertools;
use std::{collections::HashMap, fmt, sync::Arc};
use tarski_fol::syntax::SymbolKind;

/// Is the interpretation of a function symbol: a total function over the elements of a
/// universe with a fixed arity.
#[derive(Clone)]
pub struct Function<E> {
    arity: usize,
    function: Arc<dyn Fn(&[E]) -> E + Send + Sync>,
}

impl<E> Function<E> {
    /// Creates a new function of the given `arity`, computed by `function`.
    pub fn new<G>(arity: usize, function: G) -> Self
    where
        G: Fn(&[E]) -> E + Send + Sync + 'static,
    {
        Self {
            arity,
            function: Arc::new(function),
        }
    }

    /// Returns the number of arguments that the receiver takes.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Applies the receiver on `args`. The caller is responsible for passing exactly
    /// [`Function::arity`] arguments.
    pub fn apply(&self, args: &[E]) -> E {
        (self.function)(args)
    }
}

impl<E> fmt::Debug for Function<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<function/{}>", self.arity)
    }
}

/// Is the interpretation of a relation symbol: a characteristic function over tuples of
/// elements with a fixed arity.
#[derive(Clone)]
pub struct Relation<E> {
    arity: usize,
    relation: Arc<dyn Fn(&[E]) -> bool + Send + Sync>,
}

impl<E> Relation<E> {
    /// Creates a new relation of the given `arity`, decided by `relation`.
    pub fn new<G>(arity: usize, relation: G) -> Self
    where
        G: Fn(&[E]) -> bool + Send + Sync + 'static,
    {
        Self {
            arity,
            relation: Arc::new(relation),
        }
    }

    /// Returns the number of arguments that the receiver takes.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns true if `args` are related by the receiver.
    pub fn apply(&self, args: &[E]) -> bool {
        (self.relation)(args)
    }
}

impl<E> fmt::Debug for Relation<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<relation/{}>", self.arity)
    }
}

/// Is what a symbol denotes in a structure.
#[derive(Clone, Debug)]
pub enum Denotation<E> {
    /// Is the element that a constant denotes.
    Constant(E),

    /// Is the function that a function symbol denotes.
    Function(Function<E>),

    /// Is the relation that a relation symbol denotes.
    Relation(Relation<E>),
}

impl<E> Denotation<E> {
    /// Returns the kind of symbol that may denote the receiver.
    pub fn kind(&self) -> SymbolKind {
        match self {
            Self::Constant(_) => SymbolKind::Constant,
            Self::Function(_) => SymbolKind::Function,
            Self::Relation(_) => SymbolKind::Relation,
        }
    }

    /// Returns the arity of the receiver; zero for constants.
    pub fn arity(&self) -> usize {
        match self {
            Self::Constant(_) => 0,
            Self::Function(f) => f.arity(),
            Self::Relation(r) => r.arity(),
        }
    }
}

/// Maps symbol names to their [denotations].
///
/// An interpretation is built independently of any signature; [`Model::new`] checks that it
/// matches the signature of a theory.
///
/// **Example**:
/// ```rust
/// use tarski_model::semantics::Interpretation;
///
/// let interpretation = Interpretation::new()
///     .constant("0", 0u8)
///     .function("succ", 1, |args: &[u8]| (args[0] + 1) % 3)
///     .relation("<=", 2, |args: &[u8]| args[0] <= args[1]);
///
/// assert_eq!(3, interpretation.len());
/// assert!(interpretation.get("succ").is_some());
/// ```
///
/// [denotations]: crate::semantics::Denotation
/// [`Model::new`]: crate::semantics::Model::new()
#[derive(Clone)]
pub struct Interpretation<E> {
    denotations: HashMap<String, Denotation<E>>,
}

impl<E: Element> Interpretation<E> {
    /// Creates an empty interpretation.
    pub fn new() -> Self {
        Self {
            denotations: HashMap::new(),
        }
    }

    /// Sets the denotation of `name`, returning its previous denotation if there was one.
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        denotation: Denotation<E>,
    ) -> Option<Denotation<E>> {
        self.denotations.insert(name.into(), denotation)
    }

    /// Interprets the constant `name` as `element`.
    pub fn constant<S: Into<String>>(mut self, name: S, element: E) -> Self {
        self.insert(name, Denotation::Constant(element));
        self
    }

    /// Interprets the function symbol `name` as a function of `arity` arguments.
    pub fn function<S, G>(mut self, name: S, arity: usize, function: G) -> Self
    where
        S: Into<String>,
        G: Fn(&[E]) -> E + Send + Sync + 'static,
    {
        self.insert(name, Denotation::Function(Function::new(arity, function)));
        self
    }

    /// Interprets the relation symbol `name` as a relation of `arity` arguments.
    pub fn relation<S, G>(mut self, name: S, arity: usize, relation: G) -> Self
    where
        S: Into<String>,
        G: Fn(&[E]) -> bool + Send + Sync + 'static,
    {
        self.insert(name, Denotation::Relation(Relation::new(arity, relation)));
        self
    }
}

impl<E> Interpretation<E> {
    /// Returns the denotation of `name`, if it is interpreted.
    pub fn get(&self, name: &str) -> Option<&Denotation<E>> {
        self.denotations.get(name)
    }

    /// Returns an iterator over the interpreted names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.denotations.keys().map(String::as_str)
    }

    /// Returns the number of interpreted names.
    pub fn len(&self) -> usize {
        self.denotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.denotations.is_empty()
    }
}

impl<E: Element> Default for Interpretation<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for Interpretation<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries = self
            .denotations
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(name, denotation)| match denotation {
                Denotation::Constant(e) => format!("{} -> {:?}", name, e),
                Denotation::Function(fun) => format!("{} -> {:?}", name, fun),
                Denotation::Relation(rel) => format!("{} -> {:?}", name, rel),
            });
        write!(f, "{{{}}}", entries.format(", "))
    }
}
