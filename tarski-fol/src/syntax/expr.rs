/*! Defines [`Expr`], the immutable node type for first-order terms and formulae.

An expression is a node of a directed acyclic graph: combinators never consume or mutate their
operands, they wrap shared references to them in a new node. Every node caches its rendering
at construction.

[`Expr`]: crate::syntax::Expr
*/
use super::{Error, Pred, C, F, LEQ_SYM, V};
use itertools::Itertools;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops,
    sync::Arc,
};

/// Is the kind of an [`Expr`] node together with its symbol and children.
///
/// [`Expr`]: crate::syntax::Expr
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// Is a placeholder that is never evaluated.
    Empty,

    /// Is a constant term, wrapping a [constant symbol].
    ///
    /// [constant symbol]: crate::syntax::C
    Const { constant: C },

    /// Is a variable term, wrapping a [variable symbol].
    ///
    /// [variable symbol]: crate::syntax::V
    Var { variable: V },

    /// Is a composite term, made by applying a `function` on a list of `terms`.
    App { function: F, terms: Vec<Expr> },

    /// Is an atomic formula, made by applying a `predicate` on a list of `terms`.
    Atom { predicate: Pred, terms: Vec<Expr> },

    /// Is an equation between two terms.
    Equals { left: Expr, right: Expr },

    /// Is the negation of a formula.
    Not { formula: Expr },

    /// Is the conjunction of two formulae.
    And { left: Expr, right: Expr },

    /// Is the disjunction of two formulae.
    Or { left: Expr, right: Expr },

    /// Is an implication between two formulae.
    Implies { premise: Expr, consequence: Expr },

    /// Is a bi-implication between two formulae.
    Iff { left: Expr, right: Expr },

    /// Is an existentially quantified formula, binding `variable` in `formula`.
    Exists { variable: V, formula: Expr },

    /// Is a universally quantified formula, binding `variable` in `formula`.
    Forall { variable: V, formula: Expr },
}

struct Node {
    kind: ExprKind,
    text: String,
}

/// Is an immutable first-order term or formula.
///
/// Cloning an `Expr` is cheap: clones share the same node. Two expressions are equal when they
/// have the same structure, regardless of how their renderings were produced.
#[derive(Clone)]
pub struct Expr(Arc<Node>);

impl Expr {
    pub(crate) fn new(kind: ExprKind) -> Self {
        let text = render(&kind);
        Self::with_text(kind, text)
    }

    fn with_text(kind: ExprKind, text: String) -> Self {
        Self(Arc::new(Node { kind, text }))
    }

    /// Returns a variable term named `name`.
    pub fn var<S: Into<String>>(name: S) -> Self {
        V::from(name).into()
    }

    /// Returns a constant term named `name`.
    pub fn constant<S: Into<String>>(name: S) -> Self {
        C::from(name).into()
    }

    /// Returns the placeholder expression. Evaluating it is an error.
    pub fn empty() -> Self {
        Self::new(ExprKind::Empty)
    }

    /// Returns the kind of the receiver.
    #[inline(always)]
    pub fn kind(&self) -> &ExprKind {
        &self.0.kind
    }

    /// Returns the cached rendering of the receiver.
    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.0.text
    }

    /// Returns the symbol name carried by the receiver: the constant, variable, function or
    /// relation name, or the bound variable of a quantifier.
    pub fn name(&self) -> Option<&str> {
        match self.kind() {
            ExprKind::Const { constant } => Some(constant.name()),
            ExprKind::Var { variable } => Some(variable.name()),
            ExprKind::App { function, .. } => Some(function.name()),
            ExprKind::Atom { predicate, .. } => Some(predicate.name()),
            ExprKind::Exists { variable, .. } | ExprKind::Forall { variable, .. } => {
                Some(variable.name())
            }
            _ => None,
        }
    }

    /// Returns the immediate children of the receiver in order.
    pub fn children(&self) -> Vec<&Expr> {
        match self.kind() {
            ExprKind::Empty | ExprKind::Const { .. } | ExprKind::Var { .. } => Vec::new(),
            ExprKind::App { terms, .. } | ExprKind::Atom { terms, .. } => terms.iter().collect(),
            ExprKind::Equals { left, right }
            | ExprKind::And { left, right }
            | ExprKind::Or { left, right }
            | ExprKind::Iff { left, right } => vec![left, right],
            ExprKind::Implies {
                premise,
                consequence,
            } => vec![premise, consequence],
            ExprKind::Not { formula }
            | ExprKind::Exists { formula, .. }
            | ExprKind::Forall { formula, .. } => vec![formula],
        }
    }

    /// Returns true if the receiver is the placeholder expression.
    pub fn is_empty(&self) -> bool {
        matches!(self.kind(), ExprKind::Empty)
    }

    /// Returns true if the receiver is a variable.
    pub fn is_var(&self) -> bool {
        matches!(self.kind(), ExprKind::Var { .. })
    }

    /// Returns true if the receiver denotes an element: a constant, a variable or a function
    /// application.
    pub fn is_term(&self) -> bool {
        matches!(
            self.kind(),
            ExprKind::Const { .. } | ExprKind::Var { .. } | ExprKind::App { .. }
        )
    }

    /// Returns true if the receiver denotes a truth value.
    pub fn is_formula(&self) -> bool {
        !self.is_empty() && !self.is_term()
    }

    /// Returns a list of free variable symbols in the receiver.
    ///
    /// **Note**: each variable symbol appears only once, in the order of its first occurrence.
    ///
    /// **Example**:
    /// ```rust
    /// use tarski_fol::syntax::{forall, Expr, V};
    ///
    /// let x = Expr::var("x");
    /// let y = Expr::var("y");
    ///
    /// // ∀x(x ≤ y)
    /// let formula = forall(&x, &x.leq(&y)).unwrap();
    /// assert_eq!(vec![&V::from("y")], formula.free_vars());
    /// ```
    pub fn free_vars(&self) -> Vec<&V> {
        match self.kind() {
            ExprKind::Empty | ExprKind::Const { .. } => Vec::new(),
            ExprKind::Var { variable } => vec![variable],
            ExprKind::Exists { variable, formula } | ExprKind::Forall { variable, formula } => {
                formula
                    .free_vars()
                    .into_iter()
                    .filter(|v| *v != variable)
                    .collect()
            }
            _ => self
                .children()
                .into_iter()
                .flat_map(|e| e.free_vars())
                .unique()
                .collect(),
        }
    }

    /// Returns true if the receiver is a formula without free variables.
    pub fn is_sentence(&self) -> bool {
        self.is_formula() && self.free_vars().is_empty()
    }

    /// Returns an equation between the receiver and `rhs`.
    pub fn equals(&self, rhs: &Expr) -> Expr {
        Expr::new(ExprKind::Equals {
            left: self.clone(),
            right: rhs.clone(),
        })
    }

    /// Returns the atomic formula `<=(self, rhs)`, rendered in infix as `(self ≤ rhs)`.
    pub fn leq(&self, rhs: &Expr) -> Expr {
        let text = format!("({} ≤ {})", self, rhs);
        Expr::with_text(
            ExprKind::Atom {
                predicate: Pred::from(LEQ_SYM),
                terms: vec![self.clone(), rhs.clone()],
            },
            text,
        )
    }

    /// Returns the conjunction of the receiver and `rhs`.
    pub fn and(&self, rhs: &Expr) -> Expr {
        Expr::new(ExprKind::And {
            left: self.clone(),
            right: rhs.clone(),
        })
    }

    /// Returns the disjunction of the receiver and `rhs`.
    pub fn or(&self, rhs: &Expr) -> Expr {
        Expr::new(ExprKind::Or {
            left: self.clone(),
            right: rhs.clone(),
        })
    }

    /// Returns an implication with the receiver as premise and `rhs` as consequence.
    pub fn implies(&self, rhs: &Expr) -> Expr {
        Expr::new(ExprKind::Implies {
            premise: self.clone(),
            consequence: rhs.clone(),
        })
    }

    /// Returns a bi-implication between the receiver and `rhs`.
    pub fn iff(&self, rhs: &Expr) -> Expr {
        Expr::new(ExprKind::Iff {
            left: self.clone(),
            right: rhs.clone(),
        })
    }
}

/// Returns the negation of `formula`.
pub fn not(formula: &Expr) -> Expr {
    Expr::new(ExprKind::Not {
        formula: formula.clone(),
    })
}

/// Returns `formula` existentially quantified over `variable`. Fails if `variable` is not a
/// variable expression.
pub fn exists(variable: &Expr, formula: &Expr) -> Result<Expr, Error> {
    match variable.kind() {
        ExprKind::Var { variable } => Ok(Expr::new(ExprKind::Exists {
            variable: variable.clone(),
            formula: formula.clone(),
        })),
        _ => Err(Error::NotAVariable {
            expression: variable.to_string(),
        }),
    }
}

/// Returns `formula` universally quantified over `variable`. Fails if `variable` is not a
/// variable expression.
pub fn forall(variable: &Expr, formula: &Expr) -> Result<Expr, Error> {
    match variable.kind() {
        ExprKind::Var { variable } => Ok(Expr::new(ExprKind::Forall {
            variable: variable.clone(),
            formula: formula.clone(),
        })),
        _ => Err(Error::NotAVariable {
            expression: variable.to_string(),
        }),
    }
}

// binary connectives are always parenthesized
fn render(kind: &ExprKind) -> String {
    match kind {
        ExprKind::Empty => String::new(),
        ExprKind::Const { constant } => constant.to_string(),
        ExprKind::Var { variable } => variable.to_string(),
        ExprKind::App { function, terms } => format!("{}({})", function, terms.iter().join(", ")),
        ExprKind::Atom { predicate, terms } => {
            format!("{}({})", predicate, terms.iter().join(", "))
        }
        ExprKind::Equals { left, right } => format!("({} = {})", left, right),
        ExprKind::Not { formula } => format!("¬{}", formula),
        ExprKind::And { left, right } => format!("({} ∧ {})", left, right),
        ExprKind::Or { left, right } => format!("({} ∨ {})", left, right),
        ExprKind::Implies {
            premise,
            consequence,
        } => format!("({} ⇒ {})", premise, consequence),
        ExprKind::Iff { left, right } => format!("({} ⇔ {})", left, right),
        ExprKind::Exists { variable, formula } => format!("∃{}{}", variable, formula),
        ExprKind::Forall { variable, formula } => format!("∀{}{}", variable, formula),
    }
}

impl From<V> for Expr {
    fn from(variable: V) -> Self {
        Self::new(ExprKind::Var { variable })
    }
}

impl From<C> for Expr {
    fn from(constant: C) -> Self {
        Self::new(ExprKind::Const { constant })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.kind == other.0.kind
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.kind.hash(state)
    }
}

impl ops::BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        self.and(&rhs)
    }
}

impl<'a, 'b> ops::BitAnd<&'b Expr> for &'a Expr {
    type Output = Expr;

    fn bitand(self, rhs: &'b Expr) -> Expr {
        self.and(rhs)
    }
}

impl ops::BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        self.or(&rhs)
    }
}

impl<'a, 'b> ops::BitOr<&'b Expr> for &'a Expr {
    type Output = Expr;

    fn bitor(self, rhs: &'b Expr) -> Expr {
        self.or(rhs)
    }
}

impl ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        not(&self)
    }
}

impl<'a> ops::Not for &'a Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        not(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.text())
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
