//! The term model of the L3 intermediate representation.
//!
//! L3 is explicitly closure converted: an `Abstract` only sees its own parameters, and every
//! free variable has been turned into an explicit argument by an earlier stage. Trees are built by
//! an external front end (or loaded from a TOML document) and are never mutated afterwards.

mod error;
mod identifier;
mod pretty_print;
mod term;
#[cfg(test)]
mod tests;

pub use error::SyntaxError;
pub use identifier::Identifier;
pub use pretty_print::PrettyPrint;
pub use term::{Binding, BranchOperator, PrimitiveOperator, Program, Term};
