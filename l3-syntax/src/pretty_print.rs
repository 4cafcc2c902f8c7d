//! Render terms as s-expressions for diagnostics, tests and the `l3c print` command.
//! Binding forms put their body on a new line one level deeper; everything else stays inline.

use crate::{Binding, Identifier, Program, Term};

pub trait PrettyPrint {
    fn pretty_print(
        &self,
        indentation: usize,
    ) -> String;
}

fn newline(indentation: usize) -> String {
    format!("\n{}", "  ".repeat(indentation))
}

fn names(names: &[Identifier]) -> String {
    names.iter().map(|name| name.to_string()).collect::<Vec<_>>().join(" ")
}

impl PrettyPrint for Program {
    fn pretty_print(
        &self,
        indentation: usize,
    ) -> String {
        format!(
            "(l3 ({}){}{})",
            names(&self.parameters),
            newline(indentation + 1),
            self.body.pretty_print(indentation + 1)
        )
    }
}

impl PrettyPrint for Binding {
    fn pretty_print(
        &self,
        indentation: usize,
    ) -> String {
        format!("({} {})", self.name, self.value.pretty_print(indentation))
    }
}

impl PrettyPrint for Term {
    fn pretty_print(
        &self,
        indentation: usize,
    ) -> String {
        match self {
            Term::Let { bindings, body } | Term::LetRec { bindings, body } => {
                let keyword = if matches!(self, Term::Let { .. }) { "let" } else { "letrec" };
                let bindings = bindings.iter().map(|b| b.pretty_print(indentation + 1)).collect::<Vec<_>>().join(" ");
                format!(
                    "({keyword} ({bindings}){}{})",
                    newline(indentation + 1),
                    body.pretty_print(indentation + 1)
                )
            },
            Term::Reference { name } => name.to_string(),
            Term::Abstract { parameters, body } => format!(
                "(\\ ({}){}{})",
                names(parameters),
                newline(indentation + 1),
                body.pretty_print(indentation + 1)
            ),
            Term::Apply { target, arguments } => {
                let mut buf = format!("(apply {}", target.pretty_print(indentation));
                for argument in arguments {
                    buf.push(' ');
                    buf.push_str(&argument.pretty_print(indentation));
                }
                buf.push(')');
                buf
            },
            Term::Immediate { value } => value.to_string(),
            Term::Primitive { operator, left, right } => {
                format!("({operator} {} {})", left.pretty_print(indentation), right.pretty_print(indentation))
            },
            Term::Branch {
                operator,
                left,
                right,
                consequent,
                otherwise,
            } => format!(
                "(if ({operator} {} {}){}{}{}{})",
                left.pretty_print(indentation),
                right.pretty_print(indentation),
                newline(indentation + 1),
                consequent.pretty_print(indentation + 1),
                newline(indentation + 1),
                otherwise.pretty_print(indentation + 1)
            ),
            Term::Allocate { count } => format!("(allocate {count})"),
            Term::Load { base, index } => format!("(load {} {index})", base.pretty_print(indentation)),
            Term::Store { base, index, value } => {
                format!("(store {} {index} {})", base.pretty_print(indentation), value.pretty_print(indentation))
            },
            Term::Begin { effects, value } => {
                let mut buf = String::from("(begin");
                for effect in effects.iter().chain(std::iter::once(&**value)) {
                    buf.push_str(&newline(indentation + 1));
                    buf.push_str(&effect.pretty_print(indentation + 1));
                }
                buf.push(')');
                buf
            },
        }
    }
}
