use std::collections::{BTreeMap, BTreeSet};

use l3_syntax::{Binding, Identifier, Program, Term};

use crate::{CheckResult, Context, ScopeError};

/// Checks a whole program. The parameters are the only names in scope at the top of the body.
pub fn check_program(program: &Program) -> CheckResult {
    check_parameters(&program.parameters)?;
    let context = Context::from_names(&program.parameters);
    check_term(&program.body, &context)
}

/// Checks `term` against the names in `context`, returning the first violation in left-to-right,
/// outer-to-inner order.
pub fn check_term(
    term: &Term,
    context: &Context,
) -> CheckResult {
    match term {
        Term::Let { bindings, body } => {
            check_bindings(bindings)?;

            // initializers cannot see the names being introduced, or each other
            for binding in bindings {
                check_term(&binding.value, context)?;
            }

            let local = context.extend(bindings.iter().map(|b| &b.name));
            check_term(body, &local)
        },
        Term::LetRec { bindings, body } => {
            check_bindings(bindings)?;

            let local = context.extend(bindings.iter().map(|b| &b.name));
            for binding in bindings {
                check_term(&binding.value, &local)?;
            }

            check_term(body, &local)
        },
        Term::Reference { name } => {
            if context.contains(name) {
                Ok(())
            } else {
                Err(ScopeError::UnboundVariable(name.clone()))
            }
        },
        Term::Abstract { parameters, body } => {
            check_parameters(parameters)?;
            // closure converted: the enclosing scope is dropped entirely
            let local = Context::from_names(parameters);
            check_term(body, &local)
        },
        Term::Primitive { left, right, .. } => {
            check_term(left, context)?;
            check_term(right, context)
        },
        Term::Immediate { .. } => Ok(()),
        // These forms are accepted without looking at their operands. Their sub-terms are left to
        // the stages that own them.
        Term::Apply { .. }
        | Term::Branch { .. }
        | Term::Allocate { .. }
        | Term::Load { .. }
        | Term::Store { .. }
        | Term::Begin { .. } => Ok(()),
    }
}

fn check_bindings(bindings: &[Binding]) -> CheckResult {
    let duplicates = duplicate_counts(bindings.iter().map(|b| &b.name));
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ScopeError::DuplicateBinding(duplicates))
    }
}

fn check_parameters(parameters: &[Identifier]) -> CheckResult {
    let duplicates: BTreeSet<_> = duplicate_counts(parameters).into_keys().collect();
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ScopeError::DuplicateParameter(duplicates))
    }
}

/// Every name that occurs more than once, with its number of occurrences.
fn duplicate_counts<'a>(names: impl IntoIterator<Item = &'a Identifier>) -> BTreeMap<Identifier, usize> {
    let mut counts = BTreeMap::<&Identifier, usize>::new();
    for name in names {
        *counts.entry(name).or_default() += 1;
    }
    counts.into_iter().filter(|(_, count)| *count > 1).map(|(name, count)| (name.clone(), count)).collect()
}
