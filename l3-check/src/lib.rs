//! Scope checking for L3 programs.
//!
//! Runs before any lowering stage. A program passes when no binding form repeats a name and every
//! `Reference` it visits resolves in the scope it appears in. The first violation found aborts the
//! check.

mod checker;
mod context;
mod error;

pub use checker::{check_program, check_term};
pub use context::Context;
pub use error::ScopeError;

pub type CheckResult = Result<(), ScopeError>;
