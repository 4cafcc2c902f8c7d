use std::collections::{BTreeMap, BTreeSet};

use l3_syntax::Identifier;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq, Eq, Clone)]
pub enum ScopeError {
    #[error("duplicate bindings: {}", render_counts(.0))]
    #[diagnostic(code(l3::check::duplicate_binding), help("each name may be bound once per `let` or `letrec`"))]
    DuplicateBinding(BTreeMap<Identifier, usize>),
    #[error("duplicate parameters: {}", render_names(.0))]
    #[diagnostic(code(l3::check::duplicate_parameter), help("rename the repeated parameters"))]
    DuplicateParameter(BTreeSet<Identifier>),
    #[error("unbound variable: {0}")]
    #[diagnostic(
        code(l3::check::unbound_variable),
        help("bind the name in an enclosing `let`, `letrec` or parameter list; function bodies only see their own parameters")
    )]
    UnboundVariable(Identifier),
}

fn render_counts(counts: &BTreeMap<Identifier, usize>) -> String {
    let entries = counts.iter().map(|(name, count)| format!("{name}: {count}")).collect::<Vec<_>>();
    format!("{{{}}}", entries.join(", "))
}

fn render_names(names: &BTreeSet<Identifier>) -> String {
    let entries = names.iter().map(|name| name.to_string()).collect::<Vec<_>>();
    format!("{{{}}}", entries.join(", "))
}
