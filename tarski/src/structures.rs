//! Builds the example theories, structures and sentences that the commands check.
use anyhow::Error;
use itertools::Itertools;
use std::collections::BTreeSet;
use tarski_fol::syntax::{bind_symbols, exists, forall, not, Expr, Sig, Symbols, Theory};
use tarski_model::semantics::{Interpretation, Model, Universe};

pub(crate) type Subset = BTreeSet<u8>;

/// Is a named sentence together with the truth value that it is expected to have.
pub(crate) struct Property {
    pub name: &'static str,
    pub sentence: Expr,
    pub expected: bool,
}

impl Property {
    pub fn new(name: &'static str, sentence: Expr, expected: bool) -> Self {
        Self {
            name,
            sentence,
            expected,
        }
    }
}

/// Universally closes `body` over `variables`, the first variable being the outermost.
pub(crate) fn for_all(variables: &[&Expr], body: Expr) -> Result<Expr, Error> {
    let closed = variables
        .iter()
        .rev()
        .try_fold(body, |acc, v| forall(v, &acc))?;
    Ok(closed)
}

pub(crate) fn there_exists(variables: &[&Expr], body: Expr) -> Result<Expr, Error> {
    let closed = variables
        .iter()
        .rev()
        .try_fold(body, |acc, v| exists(v, &acc))?;
    Ok(closed)
}

fn vars() -> (Expr, Expr, Expr) {
    (Expr::var("x"), Expr::var("y"), Expr::var("z"))
}

fn binary(symbols: &Symbols, name: &str, left: &Expr, right: &Expr) -> Result<Expr, Error> {
    Ok(symbols.get(name)?.app2(left, right)?)
}

// Posets

pub(crate) fn poset_theory() -> Result<Theory, Error> {
    let sig = Sig::new(vec!["0"], Vec::<&str>::new(), vec!["<="], vec![("<=", 2)])?;
    let (x, y, z) = vars();
    let axioms = vec![
        for_all(&[&x], x.leq(&x))?,
        for_all(
            &[&x, &y, &z],
            (x.leq(&y) & y.leq(&z)).implies(&x.leq(&z)),
        )?,
        for_all(&[&x, &y], (x.leq(&y) & y.leq(&x)).implies(&x.equals(&y)))?,
    ];
    Ok(Theory::new(axioms, sig))
}

/// Returns the three element chain `0 ≤ 1 ≤ 2`.
pub(crate) fn chain_poset() -> Result<(Universe<u32>, Interpretation<u32>), Error> {
    let interpretation = Interpretation::new()
        .constant("0", 0)
        .relation("<=", 2, |args: &[u32]| args[0] <= args[1]);
    Ok((Universe::new(0..3)?, interpretation))
}

/// Returns the three element poset where `0` is below the incomparable `1` and `2`.
pub(crate) fn v_poset() -> Result<(Universe<u32>, Interpretation<u32>), Error> {
    let interpretation = Interpretation::new()
        .constant("0", 0)
        .relation("<=", 2, |args: &[u32]| args[0] == args[1] || args[0] == 0);
    Ok((Universe::new(0..3)?, interpretation))
}

/// Returns the properties of a three element poset with a least element; `total` is the
/// expected truth value of totality.
pub(crate) fn poset_properties(total: bool) -> Result<Vec<Property>, Error> {
    let (x, y, z) = vars();
    let w = Expr::var("w");
    let zero = Expr::constant("0");

    let distinct = not(&x.equals(&y)) & not(&x.equals(&z)) & not(&y.equals(&z));
    let covered = for_all(&[&w], w.equals(&x) | w.equals(&y) | w.equals(&z))?;

    Ok(vec![
        Property::new("least element", for_all(&[&x], zero.leq(&x))?, true),
        Property::new(
            "exactly three elements",
            there_exists(&[&x, &y, &z], distinct & covered)?,
            true,
        ),
        Property::new(
            "totality",
            for_all(&[&x, &y], x.leq(&y) | y.leq(&x))?,
            total,
        ),
    ])
}

// Boolean algebra

pub(crate) fn boolean_algebra_theory() -> Result<Theory, Error> {
    let sig = Sig::new(
        vec!["0", "1"],
        vec!["s", "i", "c"],
        vec!["<="],
        vec![("s", 2), ("i", 2), ("c", 1), ("<=", 2)],
    )?;
    let symbols = bind_symbols(&sig);
    let zero = symbols.constant("0")?;
    let one = symbols.constant("1")?;
    let s = |a: &Expr, b: &Expr| binary(&symbols, "s", a, b);
    let i = |a: &Expr, b: &Expr| binary(&symbols, "i", a, b);
    let c = |a: &Expr| -> Result<Expr, Error> { Ok(symbols.get("c")?.app1(a)?) };
    let (x, y, z) = vars();

    let mut axioms = poset_theory()?.axioms().to_vec();
    axioms.extend(vec![
        // lattice
        for_all(&[&x, &y], x.leq(&s(&x, &y)?) & y.leq(&s(&x, &y)?))?,
        for_all(
            &[&x, &y, &z],
            (x.leq(&z) & y.leq(&z)).implies(&s(&x, &y)?.leq(&z)),
        )?,
        for_all(&[&x, &y], i(&x, &y)?.leq(&x) & i(&x, &y)?.leq(&y))?,
        for_all(
            &[&x, &y, &z],
            (z.leq(&x) & z.leq(&y)).implies(&z.leq(&i(&x, &y)?)),
        )?,
        // bounds and complements
        for_all(&[&x], s(&zero, &x)?.equals(&x))?,
        for_all(&[&x], s(&one, &x)?.equals(&one))?,
        for_all(&[&x], s(&x, &c(&x)?)?.equals(&one))?,
        for_all(&[&x], i(&x, &c(&x)?)?.equals(&zero))?,
        // distributivity
        for_all(
            &[&x, &y, &z],
            i(&x, &s(&y, &z)?)?.equals(&s(&i(&x, &y)?, &i(&x, &z)?)?),
        )?,
    ]);
    Ok(Theory::new(axioms, sig))
}

/// Returns the subsets of `{1, 2, 3}` ordered by inclusion.
pub(crate) fn boolean_algebra() -> Result<Model<Subset>, Error> {
    let full: Subset = (1..=3).collect();
    let complement = full.clone();
    let universe = Universe::new((1..=3u8).powerset().map(|s| s.into_iter().collect::<Subset>()))?;
    let interpretation = Interpretation::new()
        .constant("0", Subset::new())
        .constant("1", full)
        .function("s", 2, |args: &[Subset]| &args[0] | &args[1])
        .function("i", 2, |args: &[Subset]| &args[0] & &args[1])
        .function("c", 1, move |args: &[Subset]| &args[0] ^ &complement)
        .relation("<=", 2, |args: &[Subset]| args[0].is_subset(&args[1]));
    Ok(Model::new(boolean_algebra_theory()?, universe, interpretation)?)
}

/// Returns the second distributive law, which follows from the axioms.
pub(crate) fn second_distributive_law(symbols: &Symbols) -> Result<Property, Error> {
    let s = |a: &Expr, b: &Expr| binary(symbols, "s", a, b);
    let i = |a: &Expr, b: &Expr| binary(symbols, "i", a, b);
    let (x, y, z) = vars();
    let sentence = for_all(
        &[&x, &y, &z],
        s(&x, &i(&y, &z)?)?.equals(&i(&s(&x, &y)?, &s(&x, &z)?)?),
    )?;
    Ok(Property::new("second distributive law", sentence, true))
}

// Clamp

pub(crate) fn clamp_theory() -> Result<Theory, Error> {
    let sig = Sig::new(
        vec!["0"],
        vec!["clamp", "max", "min"],
        vec!["<="],
        vec![("clamp", 3), ("max", 2), ("min", 2), ("<=", 2)],
    )?;
    Ok(Theory::new(vec![], sig))
}

/// Returns the integers between 42 and 52 with `clamp(x, a, b) = max(a, min(x, b))`.
pub(crate) fn clamp() -> Result<Model<u32>, Error> {
    let universe = Universe::new(42..53)?;
    let interpretation = Interpretation::new()
        .constant("0", 42)
        .function("clamp", 3, |args: &[u32]| args[1].max(args[0].min(args[2])))
        .function("max", 2, |args: &[u32]| args[0].max(args[1]))
        .function("min", 2, |args: &[u32]| args[0].min(args[1]))
        .relation("<=", 2, |args: &[u32]| args[0] <= args[1]);
    Ok(Model::new(clamp_theory()?, universe, interpretation)?)
}

pub(crate) fn clamp_properties(symbols: &Symbols) -> Result<Vec<Property>, Error> {
    let max = |a: &Expr, b: &Expr| binary(symbols, "max", a, b);
    let min = |a: &Expr, b: &Expr| binary(symbols, "min", a, b);
    let (x, y, z) = vars();
    let clamp = symbols.get("clamp")?.app3(&x, &y, &z)?;
    let zero = symbols.constant("0")?;

    Ok(vec![
        Property::new(
            "min is a lower bound",
            for_all(&[&x, &y], min(&x, &y)?.leq(&x) & min(&x, &y)?.leq(&y))?,
            true,
        ),
        Property::new(
            "max is an upper bound",
            for_all(&[&x, &y], x.leq(&max(&x, &y)?) & y.leq(&max(&x, &y)?))?,
            true,
        ),
        Property::new(
            "clamp is max of min",
            for_all(&[&x, &y, &z], clamp.equals(&max(&y, &min(&x, &z)?)?))?,
            true,
        ),
        Property::new(
            "clamp is bounded",
            for_all(
                &[&x, &y, &z],
                y.leq(&z).implies(&(clamp.leq(&z) & y.leq(&clamp))),
            )?,
            true,
        ),
        Property::new("least element", for_all(&[&x], zero.leq(&x))?, true),
    ])
}

// Binary relations

pub(crate) fn relation_theory() -> Result<Theory, Error> {
    let sig = Sig::new(
        Vec::<&str>::new(),
        Vec::<&str>::new(),
        vec!["r"],
        vec![("r", 2)],
    )?;
    Ok(Theory::new(vec![], sig))
}

/// Returns every binary relation over `0..size`, as lists of pairs.
pub(crate) fn binary_relations(size: u32) -> impl Iterator<Item = Vec<(u32, u32)>> {
    (0..size).cartesian_product(0..size).powerset()
}

/// Returns the structure over `0..size` where `r` is `relation`.
pub(crate) fn relation_model(
    theory: Theory,
    size: u32,
    relation: Vec<(u32, u32)>,
) -> Result<Model<u32>, Error> {
    let interpretation = Interpretation::new().relation("r", 2, move |args: &[u32]| {
        relation.contains(&(args[0], args[1]))
    });
    Ok(Model::new(theory, Universe::new(0..size)?, interpretation)?)
}

/// Returns `∃x∀y r(x, y)` and `∀y∃x r(x, y)`.
pub(crate) fn relation_sentences(symbols: &Symbols) -> Result<(Expr, Expr), Error> {
    let (x, y, _) = vars();
    let r = binary(symbols, "r", &x, &y)?;
    let phi = there_exists(&[&x], for_all(&[&y], r.clone())?)?;
    let psi = for_all(&[&y], there_exists(&[&x], r)?)?;
    Ok((phi, psi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarski_model::semantics::Assignment;

    #[test]
    fn test_for_all() {
        let (x, y, _) = vars();
        assert_eq!(
            "∀x∀y(x = y)",
            for_all(&[&x, &y], x.equals(&y)).unwrap().to_string()
        );
        assert_eq!(
            "∃x(x = x)",
            there_exists(&[&x], x.equals(&x)).unwrap().to_string()
        );
        assert!(for_all(&[&Expr::constant("0")], x.equals(&x)).is_err());
    }

    #[test]
    fn test_posets() {
        let structures = vec![(chain_poset().unwrap(), true), (v_poset().unwrap(), false)];
        for ((universe, interpretation), total) in structures {
            let model = Model::new(poset_theory().unwrap(), universe, interpretation).unwrap();
            for property in poset_properties(total).unwrap() {
                assert_eq!(
                    Ok(property.expected),
                    model.satisfies(&property.sentence),
                    "{}",
                    property.name
                );
            }
        }
    }

    #[test]
    fn test_boolean_algebra() {
        let model = boolean_algebra().unwrap();
        assert_eq!(8, model.universe().len());
        assert_eq!(12, model.theory().axioms().len());

        let symbols = bind_symbols(model.theory().signature());
        let law = second_distributive_law(&symbols).unwrap();
        assert_eq!(Ok(true), model.satisfies(&law.sentence));

        let assignment: Assignment<Subset> = vec![("x", [1].iter().cloned().collect())]
            .into_iter()
            .collect();
        let complement = symbols.get("c").unwrap().app1(&Expr::var("x")).unwrap();
        assert_eq!(
            Ok([2, 3].iter().cloned().collect::<Subset>()),
            model.value_of(&complement, &assignment)
        );
    }

    #[test]
    fn test_clamp() {
        let model = clamp().unwrap();
        let symbols = bind_symbols(model.theory().signature());
        for property in clamp_properties(&symbols).unwrap() {
            assert_eq!(Ok(true), model.satisfies(&property.sentence), "{}", property.name);
        }
    }

    #[test]
    fn test_binary_relations() {
        assert_eq!(2, binary_relations(1).count());
        assert_eq!(16, binary_relations(2).count());
        assert_eq!(512, binary_relations(3).count());
    }

    #[test]
    fn test_relation_sentences() {
        let theory = relation_theory().unwrap();
        let symbols = bind_symbols(theory.signature());
        let (phi, psi) = relation_sentences(&symbols).unwrap();
        assert_eq!("∃x∀yr(x, y)", phi.to_string());

        // identity on two elements: every element is reached, but by different elements
        let model = relation_model(theory, 2, vec![(0, 0), (1, 1)]).unwrap();
        assert_eq!(Ok(false), model.satisfies(&phi));
        assert_eq!(Ok(true), model.satisfies(&psi));
    }
}
