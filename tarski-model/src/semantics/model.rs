use super::{Assignment, Denotation, Element, Error, Evaluate, Interpretation, Universe, Value};
use crate::trace::{ARITY, AXIOM, COVERAGE, MODEL, MODEL_CHECK, REJECT};
use itertools::Itertools;
use std::collections::HashSet;
use tarski_fol::syntax::{Expr, Sig, SymbolKind, Theory};
use tracing::Level;

/// Is a structure that is known to be a model of a [`Theory`].
///
/// A `Model` can only be obtained through [`Model::new`], which checks, in order, that
///
/// 1. the interpretation names exactly the symbols of the theory's signature,
/// 2. every symbol is interpreted by a denotation of its declared kind and arity,
/// 3. every axiom of the theory is true in the structure under the empty assignment.
///
/// [`Theory`]: tarski_fol::syntax::Theory
#[derive(Clone, Debug)]
pub struct Model<E> {
    theory: Theory,
    universe: Universe<E>,
    interpretation: Interpretation<E>,
}

impl<E: Element> Model<E> {
    /// Validates `universe` and `interpretation` against `theory` and returns a model of it.
    pub fn new(
        theory: Theory,
        universe: Universe<E>,
        interpretation: Interpretation<E>,
    ) -> Result<Self, Error> {
        let span = span!(
            Level::INFO,
            MODEL_CHECK,
            universe = universe.len() as u64,
            axioms = theory.axioms().len() as u64
        );
        let _enter = span.enter();

        let checked = check_coverage(theory.signature(), &interpretation)
            .and_then(|_| check_arities(theory.signature(), &interpretation))
            .and_then(|_| check_axioms(&theory, &universe, &interpretation));
        if let Err(err) = checked {
            info!(event = REJECT, reason = %err);
            return Err(err);
        }

        info!(event = MODEL, universe = ?universe.elements());
        Ok(Self {
            theory,
            universe,
            interpretation,
        })
    }

    /// Evaluates `expr` in the receiver under `assignment`.
    pub fn eval(&self, expr: &Expr, assignment: &Assignment<E>) -> Result<Value<E>, Error> {
        expr.eval(&self.universe, &self.interpretation, assignment)
    }

    /// Returns the truth value of `formula` in the receiver under `assignment`.
    pub fn holds(&self, formula: &Expr, assignment: &Assignment<E>) -> Result<bool, Error> {
        formula.eval_formula(&self.universe, &self.interpretation, assignment)
    }

    /// Returns true if `sentence` is true in the receiver. Free variables of `sentence` are
    /// unbound, so evaluating a formula that is not a sentence fails.
    pub fn satisfies(&self, sentence: &Expr) -> Result<bool, Error> {
        self.holds(sentence, &Assignment::new())
    }

    /// Returns the element that `term` denotes in the receiver under `assignment`.
    pub fn value_of(&self, term: &Expr, assignment: &Assignment<E>) -> Result<E, Error> {
        term.eval_term(&self.universe, &self.interpretation, assignment)
    }

    pub fn theory(&self) -> &Theory {
        &self.theory
    }

    pub fn universe(&self) -> &Universe<E> {
        &self.universe
    }

    pub fn interpretation(&self) -> &Interpretation<E> {
        &self.interpretation
    }
}

fn check_coverage<E>(sig: &Sig, interpretation: &Interpretation<E>) -> Result<(), Error> {
    let declared = sig.name_set();
    let interpreted: HashSet<&str> = interpretation.names().collect();

    let missing: Vec<String> = declared
        .difference(&interpreted)
        .map(|s| s.to_string())
        .sorted()
        .collect();
    let extra: Vec<String> = interpreted
        .difference(&declared)
        .map(|s| s.to_string())
        .sorted()
        .collect();
    debug!(event = COVERAGE, missing = ?missing, extra = ?extra);

    if missing.is_empty() && extra.is_empty() {
        Ok(())
    } else {
        Err(Error::InterpretationMismatch { missing, extra })
    }
}

fn check_arities<E>(sig: &Sig, interpretation: &Interpretation<E>) -> Result<(), Error> {
    let declared = sig
        .constants()
        .iter()
        .map(|c| (c.name(), SymbolKind::Constant, 0))
        .chain(
            sig.functions()
                .iter()
                .map(|f| (f.symbol.name(), SymbolKind::Function, f.arity)),
        )
        .chain(
            sig.predicates()
                .iter()
                .map(|p| (p.symbol.name(), SymbolKind::Relation, p.arity)),
        );

    for (symbol, kind, arity) in declared {
        let denotation: &Denotation<E> =
            interpretation
                .get(symbol)
                .ok_or_else(|| Error::UnknownInterpretationKey {
                    symbol: symbol.to_string(),
                })?;
        if denotation.kind() != kind {
            return Err(Error::KindMismatch {
                symbol: symbol.to_string(),
                expected: kind,
                found: denotation.kind(),
            });
        }
        if denotation.arity() != arity {
            return Err(Error::ArityMismatch {
                symbol: symbol.to_string(),
                expected: arity,
                found: denotation.arity(),
            });
        }
    }
    debug!(event = ARITY, symbols = interpretation.len() as u64);
    Ok(())
}

fn check_axioms<E: Element>(
    theory: &Theory,
    universe: &Universe<E>,
    interpretation: &Interpretation<E>,
) -> Result<(), Error> {
    let assignment = Assignment::new();
    for axiom in theory.axioms() {
        let holds = axiom.eval_formula(universe, interpretation, &assignment)?;
        debug!(event = AXIOM, axiom = %axiom, holds = holds);
        if !holds {
            return Err(Error::AxiomViolation {
                axiom: axiom.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use tarski_fol::syntax::{bind_symbols, exists, forall, not, Pred};

    #[test]
    fn test_posets() {
        for (universe, interpretation) in vec![chain_poset(), v_poset()] {
            assert!(Model::new(poset_theory(), universe, interpretation).is_ok());
        }
    }

    #[test]
    fn test_poset_expressions() {
        let (x0, x1, x2) = (Expr::var("x0"), Expr::var("x1"), Expr::var("x2"));
        let zero = Expr::constant("0");
        let assignment: Assignment<u32> =
            vec![("x0", 0), ("x1", 1), ("x2", 2)].into_iter().collect();

        for (universe, interpretation) in vec![chain_poset(), v_poset()] {
            let leq = |a: u32, b: u32| match interpretation.get("<=") {
                Some(Denotation::Relation(r)) => r.apply(&[a, b]),
                _ => panic!("`<=` is not a relation"),
            };
            let model = Model::new(poset_theory(), universe, interpretation.clone()).unwrap();
            let holds = |formula: &Expr| model.holds(formula, &assignment).unwrap();

            assert_eq!(0, model.value_of(&zero, &assignment).unwrap());
            assert_eq!(2, model.value_of(&x2, &assignment).unwrap());
            assert!(holds(&zero.equals(&zero)));
            assert!(!holds(&x1.equals(&zero)));
            assert_eq!(leq(1, 2), holds(&x1.leq(&x2)));
            assert_eq!(leq(1, 2), holds(&(x1.equals(&zero) | x1.leq(&x2))));
            assert_eq!(leq(0, 2), holds(&(!x1.equals(&zero) & zero.leq(&x2))));
            assert!(holds(&(x0.leq(&x1) & x1.leq(&x2)).implies(&x0.leq(&x2))));
            assert!(holds(&x1.equals(&x2).iff(&x2.equals(&x1))));
            assert_eq!(
                !(leq(1, 2) || leq(2, 1)),
                holds(&not(&not(&x1.equals(&x2)).implies(&(x1.leq(&x2) | x2.leq(&x1)))))
            );
        }
    }

    #[test]
    fn test_poset_properties() {
        let (chain_universe, chain_interpretation) = chain_poset();
        let chain = Model::new(poset_theory(), chain_universe, chain_interpretation).unwrap();
        let (v_universe, v_interpretation) = v_poset();
        let v = Model::new(poset_theory(), v_universe, v_interpretation).unwrap();

        let (x, y, z, w) = (
            Expr::var("x"),
            Expr::var("y"),
            Expr::var("z"),
            Expr::var("w"),
        );
        let zero_min = forall(&x, &Expr::constant("0").leq(&x)).unwrap();
        let total = forall(&x, &forall(&y, &(x.leq(&y) | y.leq(&x))).unwrap()).unwrap();
        let only_three = exists(
            &x,
            &exists(
                &y,
                &exists(
                    &z,
                    &(!x.equals(&y) & !x.equals(&z) & !y.equals(&z)
                        & forall(&w, &(w.equals(&x) | w.equals(&y) | w.equals(&z))).unwrap()),
                )
                .unwrap(),
            )
            .unwrap(),
        )
        .unwrap();

        for model in &[&chain, &v] {
            assert_eq!(Ok(true), model.satisfies(&zero_min));
            assert_eq!(Ok(true), model.satisfies(&only_three));
        }
        assert_eq!(Ok(true), chain.satisfies(&total));
        assert_eq!(Ok(false), v.satisfies(&total));
    }

    #[test]
    fn test_boolean_algebra() {
        let sig = Sig::new(
            vec!["0", "1"],
            vec!["and", "neg"],
            vec!["<="],
            vec![("and", 2), ("neg", 1), ("<=", 2)],
        )
        .unwrap();
        let symbols = bind_symbols(&sig);
        let and = symbols.get("and").unwrap();
        let neg = symbols.get("neg").unwrap();
        let zero = symbols.constant("0").unwrap();
        let (x, y) = (x(), y());

        let meet_is_lower_bound = forall(
            &x,
            &forall(
                &y,
                &(and.app2(&x, &y).unwrap().leq(&x) & and.app2(&x, &y).unwrap().leq(&y)),
            )
            .unwrap(),
        )
        .unwrap();
        let complement = forall(&x, &and.app2(&x, &neg.app1(&x).unwrap()).unwrap().equals(&zero))
            .unwrap();
        let mut axioms = poset_theory().axioms().to_vec();
        axioms.push(meet_is_lower_bound);
        axioms.push(complement);

        let model = Model::new(
            Theory::new(axioms, sig),
            bool_universe(),
            bool_interpretation(),
        )
        .unwrap();

        let involution = forall(&x, &neg.app1(&neg.app1(&x).unwrap()).unwrap().equals(&x)).unwrap();
        assert_eq!(Ok(true), model.satisfies(&involution));

        let assignment: Assignment<bool> = vec![("x", true), ("y", false)].into_iter().collect();
        let term = neg.app1(&and.app2(&x, &y).unwrap()).unwrap();
        assert_eq!(Ok(true), model.value_of(&term, &assignment));
        assert_eq!(Ok(Value::Element(true)), model.eval(&term, &assignment));
        assert_eq!(Ok(false), model.holds(&x.leq(&y), &assignment));
    }

    #[test]
    fn test_clamp() {
        let (universe, interpretation) = clamp_structure();
        let theory = Theory::new(vec![], clamp_sig());
        let model = Model::new(theory, universe, interpretation).unwrap();
        let symbols = bind_symbols(model.theory().signature());
        let clamp = symbols.get("clamp").unwrap();
        let max = symbols.get("max").unwrap();
        let min = symbols.get("min").unwrap();
        let zero = symbols.constant("0").unwrap();
        let (x, y, z) = (Expr::var("x"), Expr::var("y"), Expr::var("z"));

        let min_works = forall(
            &x,
            &forall(
                &y,
                &(min.app2(&x, &y).unwrap().leq(&x) & min.app2(&x, &y).unwrap().leq(&y)),
            )
            .unwrap(),
        )
        .unwrap();
        let max_works = forall(
            &x,
            &forall(
                &y,
                &(x.leq(&max.app2(&x, &y).unwrap()) & y.leq(&max.app2(&x, &y).unwrap())),
            )
            .unwrap(),
        )
        .unwrap();
        let clamp_xyz = clamp.app3(&x, &y, &z).unwrap();
        let clamp_works = forall(
            &x,
            &forall(
                &y,
                &forall(
                    &z,
                    &clamp_xyz.equals(&max.app2(&y, &min.app2(&x, &z).unwrap()).unwrap()),
                )
                .unwrap(),
            )
            .unwrap(),
        )
        .unwrap();
        let clamp_bounds = forall(
            &x,
            &forall(
                &y,
                &forall(
                    &z,
                    &y.leq(&z)
                        .implies(&(clamp_xyz.leq(&z) & y.leq(&clamp_xyz))),
                )
                .unwrap(),
            )
            .unwrap(),
        )
        .unwrap();
        let zero_min = forall(&x, &zero.leq(&x)).unwrap();

        for sentence in &[min_works, max_works, clamp_works, clamp_bounds, zero_min] {
            assert_eq!(Ok(true), model.satisfies(sentence), "{}", sentence);
        }
    }

    #[test]
    fn test_reflexivity_of_equality() {
        let (universe, interpretation) = clamp_structure();
        let model = Model::new(Theory::new(vec![], clamp_sig()), universe, interpretation).unwrap();
        for element in model.universe().iter() {
            let assignment = Assignment::new().bind("x".into(), *element);
            assert_eq!(
                Ok(true),
                model.holds(&Expr::var("x").equals(&Expr::var("x")), &assignment)
            );
        }
    }

    #[test]
    fn test_interpretation_mismatch() {
        let (universe, interpretation) = chain_poset();
        let interpretation = interpretation.relation("r", 1, |_: &[u32]| true);
        let mut sig = Sig::new_empty();
        sig.add_constant("0".into()).unwrap();
        sig.add_constant("1".into()).unwrap();
        let theory = Theory::new(vec![], sig);

        assert_eq!(
            Err(Error::InterpretationMismatch {
                missing: vec!["1".to_string()],
                extra: vec!["<=".to_string(), "r".to_string()],
            }),
            Model::new(theory, universe, interpretation).map(|_| ())
        );
    }

    #[test]
    fn test_missing_relation() {
        let (universe, _) = chain_poset();
        let interpretation = Interpretation::new().constant("0", 0);
        assert_eq!(
            Err(Error::InterpretationMismatch {
                missing: vec!["<=".to_string()],
                extra: vec![],
            }),
            Model::new(poset_theory(), universe, interpretation).map(|_| ())
        );
    }

    #[test]
    fn test_kind_mismatch() {
        let (universe, _) = chain_poset();
        let interpretation = Interpretation::new()
            .constant("0", 0)
            .function("<=", 2, |args: &[u32]| args[0]);
        assert_eq!(
            Err(Error::KindMismatch {
                symbol: "<=".to_string(),
                expected: SymbolKind::Relation,
                found: SymbolKind::Function,
            }),
            Model::new(poset_theory(), universe, interpretation).map(|_| ())
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let (universe, _) = chain_poset();
        let interpretation = Interpretation::new()
            .constant("0", 0)
            .relation("<=", 3, |_: &[u32]| true);
        assert_eq!(
            Err(Error::ArityMismatch {
                symbol: "<=".to_string(),
                expected: 2,
                found: 3,
            }),
            Model::new(poset_theory(), universe, interpretation).map(|_| ())
        );
    }

    #[test]
    fn test_axiom_violation() {
        let (universe, _) = chain_poset();
        // strict order: reflexivity fails first
        let interpretation = Interpretation::new()
            .constant("0", 0)
            .relation("<=", 2, |args: &[u32]| args[0] < args[1]);
        let theory = poset_theory();
        let reflexivity = theory.axioms()[0].clone();
        assert_eq!(
            Err(Error::AxiomViolation { axiom: reflexivity }),
            Model::new(theory, universe, interpretation).map(|_| ())
        );
    }

    #[test]
    fn test_open_axiom() {
        let (universe, interpretation) = chain_poset();
        let mut axioms = poset_theory().axioms().to_vec();
        axioms.push(Expr::var("x").leq(&Expr::var("x")));
        let theory = Theory::new(axioms, poset_sig());
        assert_eq!(
            Err(Error::UnboundVariable {
                variable: "x".to_string()
            }),
            Model::new(theory, universe, interpretation).map(|_| ())
        );
    }

    #[test]
    fn test_satisfies_open_formula() {
        let (universe, interpretation) = chain_poset();
        let model = Model::new(poset_theory(), universe, interpretation).unwrap();
        assert!(model.satisfies(&Expr::var("x").leq(&Expr::var("x"))).is_err());
    }

    #[test]
    fn test_explore_binary_relations() {
        let (x, y) = (Expr::var("x"), Expr::var("y"));
        let r = |a: &Expr, b: &Expr| Pred::from("r").app(vec![a.clone(), b.clone()]);
        let phi = exists(&x, &forall(&y, &r(&x, &y)).unwrap()).unwrap();
        let psi = forall(&y, &exists(&x, &r(&x, &y)).unwrap()).unwrap();

        let mut psi_without_phi = 0;
        for size in 1..=3u32 {
            for relation in binary_relations(size) {
                let theory = Theory::new(vec![], relation_sig());
                let universe = Universe::new(0..size).unwrap();
                let interpretation = Interpretation::new()
                    .relation("r", 2, move |args: &[u32]| relation.contains(&(args[0], args[1])));
                let model = Model::new(theory, universe, interpretation).unwrap();

                let satisfies_phi = model.satisfies(&phi).unwrap();
                let satisfies_psi = model.satisfies(&psi).unwrap();
                assert!(!satisfies_phi || satisfies_psi);
                if satisfies_psi && !satisfies_phi {
                    psi_without_phi += 1;
                }
            }
        }
        // e.g. the identity relation on two elements
        assert!(psi_without_phi > 0);
    }
}
