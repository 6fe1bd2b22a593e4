/*! Tarski evaluates first-order terms and formulae in finite structures and checks that a
structure is a model of a theory.

A [`Model`] bundles a finite [`Universe`] and an [`Interpretation`] of the symbols of a theory's
signature, and is only ever constructed if the interpretation covers the signature exactly,
agrees with its arities and satisfies every axiom of the theory.

[`Model`]: crate::semantics::Model
[`Universe`]: crate::semantics::Universe
[`Interpretation`]: crate::semantics::Interpretation */
pub mod semantics;
pub mod trace;

#[cfg(test)]
mod test_prelude;

#[macro_use]
extern crate tracing;
