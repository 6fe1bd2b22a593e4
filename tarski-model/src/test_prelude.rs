use crate::semantics::*;
use itertools::Itertools;
use tarski_fol::syntax::*;

// Variables
pub fn x() -> Expr { Expr::var("x") }

pub fn y() -> Expr { Expr::var("y") }

pub fn z() -> Expr { Expr::var("z") }

// Two-element Boolean structure with `0`, `1`, `and`, `neg` and `<=`.
pub fn bool_universe() -> Universe<bool> {
    Universe::new(vec![false, true]).unwrap()
}

pub fn bool_interpretation() -> Interpretation<bool> {
    Interpretation::new()
        .constant("0", false)
        .constant("1", true)
        .function("and", 2, |args: &[bool]| args[0] && args[1])
        .function("neg", 1, |args: &[bool]| !args[0])
        .relation("<=", 2, |args: &[bool]| args[0] <= args[1])
}

// Posets
pub fn poset_sig() -> Sig {
    Sig::new(vec!["0"], Vec::<&str>::new(), vec!["<="], vec![("<=", 2)]).unwrap()
}

pub fn poset_theory() -> Theory {
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
    Theory::new(vec![reflexivity, transitivity, antisymmetry], poset_sig())
}

pub fn chain_poset() -> (Universe<u32>, Interpretation<u32>) {
    let interpretation = Interpretation::new()
        .constant("0", 0)
        .relation("<=", 2, |args: &[u32]| args[0] <= args[1]);
    (Universe::new(0..3).unwrap(), interpretation)
}

pub fn v_poset() -> (Universe<u32>, Interpretation<u32>) {
    let interpretation = Interpretation::new()
        .constant("0", 0)
        .relation("<=", 2, |args: &[u32]| args[0] == args[1] || args[0] == 0);
    (Universe::new(0..3).unwrap(), interpretation)
}

// Integers between 42 and 52 with `clamp`, `max` and `min`
pub fn clamp_sig() -> Sig {
    Sig::new(
        vec!["0"],
        vec!["clamp", "max", "min"],
        vec!["<="],
        vec![("clamp", 3), ("max", 2), ("min", 2), ("<=", 2)],
    )
    .unwrap()
}

pub fn clamp_structure() -> (Universe<u32>, Interpretation<u32>) {
    let interpretation = Interpretation::new()
        .constant("0", 42)
        .function("clamp", 3, |args: &[u32]| args[1].max(args[0].min(args[2])))
        .function("max", 2, |args: &[u32]| args[0].max(args[1]))
        .function("min", 2, |args: &[u32]| args[0].min(args[1]))
        .relation("<=", 2, |args: &[u32]| args[0] <= args[1]);
    (Universe::new(42..53).unwrap(), interpretation)
}

// Binary relations
pub fn relation_sig() -> Sig {
    let mut sig = Sig::new_empty();
    sig.add_predicate(PredSig {
        symbol: Pred::from("r"),
        arity: 2,
    })
    .unwrap();
    sig
}

/// Returns every binary relation over `0..size`.
pub fn binary_relations(size: u32) -> Vec<Vec<(u32, u32)>> {
    (0..size)
        .cartesian_product(0..size)
        .powerset()
        .collect()
}
