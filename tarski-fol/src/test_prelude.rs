use crate::syntax::*;

// Variables
pub fn x() -> Expr { Expr::var("x") }

pub fn y() -> Expr { Expr::var("y") }

pub fn z() -> Expr { Expr::var("z") }

// Constants
pub fn zero() -> Expr { Expr::constant("0") }

// Functions
pub fn f() -> F { F::from("f") }

// Predicates
#[allow(non_snake_case)]
pub fn P() -> Pred { Pred::from("P") }

pub fn boolean_algebra_sig() -> Sig {
    Sig::new(
        vec!["0", "1"],
        vec!["s", "i", "c"],
        vec!["<="],
        vec![("s", 2), ("i", 2), ("c", 1), ("<=", 2)],
    )
    .unwrap()
}

pub fn poset_axioms() -> Vec<Expr> {
    let reflexivity = forall(&x(), &x().leq(&x())).unwrap();
    let transitivity = forall(
        &x(),
        &forall(
            &y(),
            &forall(&z(), &(x().leq(&y()) & y().leq(&z())).implies(&x().leq(&z()))).unwrap(),
        )
        .unwrap(),
    )
    .unwrap();
    let antisymmetry = forall(
        &x(),
        &forall(&y(), &(x().leq(&y()) & y().leq(&x())).implies(&x().equals(&y()))).unwrap(),
    )
    .unwrap();
    vec![reflexivity, transitivity, antisymmetry]
}
