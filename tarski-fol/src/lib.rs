/*! Provides a set of tools for declaring first-order signatures and building terms and formulae
over them with a combinator-based API. */
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
#[cfg(test)]
pub mod test_prelude;

pub use syntax::Error;
