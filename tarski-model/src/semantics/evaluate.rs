use super::{Assignment, Denotation, Element, Error, Interpretation, Universe, Value};
use tarski_fol::syntax::{Expr, ExprKind, SymbolKind};

/// Is the trait of syntactic objects that can be evaluated in a structure, given by a
/// `universe` and an `interpretation`, under an `assignment` of elements to variables.
pub trait Evaluate {
    /// Evaluates the receiver to an element if it is a term or to a truth value if it is a
    /// formula.
    fn eval<E: Element>(
        &self,
        universe: &Universe<E>,
        interpretation: &Interpretation<E>,
        assignment: &Assignment<E>,
    ) -> Result<Value<E>, Error>;

    /// Evaluates the receiver to an element, failing with [`Error::NotATerm`] if the receiver
    /// is a formula.
    fn eval_term<E: Element>(
        &self,
        universe: &Universe<E>,
        interpretation: &Interpretation<E>,
        assignment: &Assignment<E>,
    ) -> Result<E, Error>;

    /// Evaluates the receiver to a truth value, failing with [`Error::NotAFormula`] if the
    /// receiver is a term.
    fn eval_formula<E: Element>(
        &self,
        universe: &Universe<E>,
        interpretation: &Interpretation<E>,
        assignment: &Assignment<E>,
    ) -> Result<bool, Error>;
}

impl Evaluate for Expr {
    fn eval<E: Element>(
        &self,
        universe: &Universe<E>,
        interpretation: &Interpretation<E>,
        assignment: &Assignment<E>,
    ) -> Result<Value<E>, Error> {
        Structure::new(universe, interpretation).eval(self, assignment)
    }

    fn eval_term<E: Element>(
        &self,
        universe: &Universe<E>,
        interpretation: &Interpretation<E>,
        assignment: &Assignment<E>,
    ) -> Result<E, Error> {
        Structure::new(universe, interpretation).term(self, assignment)
    }

    fn eval_formula<E: Element>(
        &self,
        universe: &Universe<E>,
        interpretation: &Interpretation<E>,
        assignment: &Assignment<E>,
    ) -> Result<bool, Error> {
        Structure::new(universe, interpretation).formula(self, assignment)
    }
}

// The pair that evaluation recurses over; only the assignment changes between calls.
struct Structure<'s, E> {
    universe: &'s Universe<E>,
    interpretation: &'s Interpretation<E>,
}

impl<'s, E: Element> Structure<'s, E> {
    fn new(universe: &'s Universe<E>, interpretation: &'s Interpretation<E>) -> Self {
        Self {
            universe,
            interpretation,
        }
    }

    fn eval(&self, expr: &Expr, assignment: &Assignment<E>) -> Result<Value<E>, Error> {
        match expr.kind() {
            ExprKind::Empty => Err(Error::EmptyExpressionEvaluated),
            ExprKind::Const { .. } | ExprKind::Var { .. } | ExprKind::App { .. } => {
                self.term(expr, assignment).map(Value::Element)
            }
            _ => self.formula(expr, assignment).map(Value::Truth),
        }
    }

    fn denotation(&self, symbol: &str) -> Result<&'s Denotation<E>, Error> {
        self.interpretation
            .get(symbol)
            .ok_or_else(|| Error::UnknownInterpretationKey {
                symbol: symbol.to_string(),
            })
    }

    fn args(
        &self,
        symbol: &str,
        arity: usize,
        terms: &[Expr],
        assignment: &Assignment<E>,
    ) -> Result<Vec<E>, Error> {
        if terms.len() != arity {
            return Err(Error::ArityMismatch {
                symbol: symbol.to_string(),
                expected: arity,
                found: terms.len(),
            });
        }
        terms.iter().map(|t| self.term(t, assignment)).collect()
    }

    fn term(&self, expr: &Expr, assignment: &Assignment<E>) -> Result<E, Error> {
        match expr.kind() {
            ExprKind::Const { constant } => match self.denotation(constant.name())? {
                Denotation::Constant(element) => Ok(element.clone()),
                other => Err(kind_mismatch(constant.name(), SymbolKind::Constant, other)),
            },
            ExprKind::Var { variable } => {
                assignment
                    .get(variable)
                    .cloned()
                    .ok_or_else(|| Error::UnboundVariable {
                        variable: variable.to_string(),
                    })
            }
            ExprKind::App { function, terms } => match self.denotation(function.name())? {
                Denotation::Function(f) => {
                    let args = self.args(function.name(), f.arity(), terms, assignment)?;
                    Ok(f.apply(&args))
                }
                other => Err(kind_mismatch(function.name(), SymbolKind::Function, other)),
            },
            ExprKind::Empty => Err(Error::EmptyExpressionEvaluated),
            _ => Err(Error::NotATerm {
                expression: expr.to_string(),
            }),
        }
    }

    fn formula(&self, expr: &Expr, assignment: &Assignment<E>) -> Result<bool, Error> {
        match expr.kind() {
            ExprKind::Atom { predicate, terms } => match self.denotation(predicate.name())? {
                Denotation::Relation(r) => {
                    let args = self.args(predicate.name(), r.arity(), terms, assignment)?;
                    Ok(r.apply(&args))
                }
                other => Err(kind_mismatch(predicate.name(), SymbolKind::Relation, other)),
            },
            ExprKind::Equals { left, right } => {
                Ok(self.term(left, assignment)? == self.term(right, assignment)?)
            }
            ExprKind::Not { formula } => Ok(!self.formula(formula, assignment)?),
            ExprKind::And { left, right } => {
                Ok(self.formula(left, assignment)? && self.formula(right, assignment)?)
            }
            ExprKind::Or { left, right } => {
                Ok(self.formula(left, assignment)? || self.formula(right, assignment)?)
            }
            ExprKind::Implies {
                premise,
                consequence,
            } => Ok(!self.formula(premise, assignment)? || self.formula(consequence, assignment)?),
            ExprKind::Iff { left, right } => {
                Ok(self.formula(left, assignment)? == self.formula(right, assignment)?)
            }
            // quantifiers visit every element; the first error aborts the fold
            ExprKind::Exists { variable, formula } => {
                self.universe
                    .iter()
                    .try_fold(false, |acc, element| -> Result<bool, Error> {
                        let derived = assignment.bind(variable.clone(), element.clone());
                        let holds = self.formula(formula, &derived)?;
                        Ok(acc || holds)
                    })
            }
            ExprKind::Forall { variable, formula } => {
                self.universe
                    .iter()
                    .try_fold(true, |acc, element| -> Result<bool, Error> {
                        let derived = assignment.bind(variable.clone(), element.clone());
                        let holds = self.formula(formula, &derived)?;
                        Ok(acc && holds)
                    })
            }
            ExprKind::Empty => Err(Error::EmptyExpressionEvaluated),
            _ => Err(Error::NotAFormula {
                expression: expr.to_string(),
            }),
        }
    }
}

fn kind_mismatch<E>(symbol: &str, expected: SymbolKind, found: &Denotation<E>) -> Error {
    Error::KindMismatch {
        symbol: symbol.to_string(),
        expected,
        found: found.kind(),
    }
}
