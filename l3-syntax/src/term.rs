use serde::{Deserialize, Serialize};

use crate::{Identifier, SyntaxError};

/// The entry point of a compilation unit. Its parameters are the only names in scope at the top
/// of `body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub parameters: Vec<Identifier>,
    pub body:       Term,
}

impl Program {
    pub fn new(
        parameters: impl IntoIterator<Item = impl Into<Identifier>>,
        body: Term,
    ) -> Self {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
            body,
        }
    }

    /// Loads a program from a TOML document. Every term is a single-key table naming its variant,
    /// for example `{ reference = { name = "x" } }`.
    pub fn from_toml_str(source: &str) -> Result<Self, SyntaxError> {
        Ok(toml::from_str(source)?)
    }
}

/// One `name = value` pair of a `let` or `letrec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub name:  Identifier,
    pub value: Term,
}

impl Binding {
    pub fn new(
        name: impl Into<Identifier>,
        value: Term,
    ) -> Self {
        Self { name: name.into(), value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
}

impl std::fmt::Display for PrimitiveOperator {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let symbol = match self {
            PrimitiveOperator::Add => "+",
            PrimitiveOperator::Subtract => "-",
            PrimitiveOperator::Multiply => "*",
        };
        write!(f, "{symbol}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchOperator {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "==")]
    Equal,
}

impl std::fmt::Display for BranchOperator {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let symbol = match self {
            BranchOperator::Less => "<",
            BranchOperator::Equal => "==",
        };
        write!(f, "{symbol}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    /// Non-recursive binding. Initializers see only the enclosing scope.
    Let { bindings: Vec<Binding>, body: Box<Term> },
    /// Mutually recursive binding. Initializers and body all see every bound name.
    #[serde(rename = "letrec")]
    LetRec { bindings: Vec<Binding>, body: Box<Term> },
    Reference { name: Identifier },
    /// A closed function. The body sees its parameters and nothing else.
    Abstract { parameters: Vec<Identifier>, body: Box<Term> },
    Apply { target: Box<Term>, arguments: Vec<Term> },
    Immediate { value: i64 },
    Primitive {
        operator: PrimitiveOperator,
        left:     Box<Term>,
        right:    Box<Term>,
    },
    Branch {
        operator:   BranchOperator,
        left:       Box<Term>,
        right:      Box<Term>,
        consequent: Box<Term>,
        otherwise:  Box<Term>,
    },
    Allocate { count: usize },
    Load { base: Box<Term>, index: usize },
    Store {
        base:  Box<Term>,
        index: usize,
        value: Box<Term>,
    },
    Begin { effects: Vec<Term>, value: Box<Term> },
}

impl Term {
    pub fn reference(name: impl Into<Identifier>) -> Self {
        Term::Reference { name: name.into() }
    }

    pub fn immediate(value: i64) -> Self {
        Term::Immediate { value }
    }

    pub fn let_(
        bindings: impl IntoIterator<Item = (impl Into<Identifier>, Term)>,
        body: Term,
    ) -> Self {
        Term::Let {
            bindings: collect_bindings(bindings),
            body:     Box::new(body),
        }
    }

    pub fn letrec(
        bindings: impl IntoIterator<Item = (impl Into<Identifier>, Term)>,
        body: Term,
    ) -> Self {
        Term::LetRec {
            bindings: collect_bindings(bindings),
            body:     Box::new(body),
        }
    }

    pub fn abstract_(
        parameters: impl IntoIterator<Item = impl Into<Identifier>>,
        body: Term,
    ) -> Self {
        Term::Abstract {
            parameters: parameters.into_iter().map(Into::into).collect(),
            body:       Box::new(body),
        }
    }

    pub fn apply(
        target: Term,
        arguments: impl IntoIterator<Item = Term>,
    ) -> Self {
        Term::Apply {
            target:    Box::new(target),
            arguments: arguments.into_iter().collect(),
        }
    }

    pub fn primitive(
        operator: PrimitiveOperator,
        left: Term,
        right: Term,
    ) -> Self {
        Term::Primitive {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn branch(
        operator: BranchOperator,
        left: Term,
        right: Term,
        consequent: Term,
        otherwise: Term,
    ) -> Self {
        Term::Branch {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            consequent: Box::new(consequent),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn allocate(count: usize) -> Self {
        Term::Allocate { count }
    }

    pub fn load(
        base: Term,
        index: usize,
    ) -> Self {
        Term::Load { base: Box::new(base), index }
    }

    pub fn store(
        base: Term,
        index: usize,
        value: Term,
    ) -> Self {
        Term::Store {
            base: Box::new(base),
            index,
            value: Box::new(value),
        }
    }

    pub fn begin(
        effects: impl IntoIterator<Item = Term>,
        value: Term,
    ) -> Self {
        Term::Begin {
            effects: effects.into_iter().collect(),
            value:   Box::new(value),
        }
    }
}

fn collect_bindings(bindings: impl IntoIterator<Item = (impl Into<Identifier>, Term)>) -> Vec<Binding> {
    bindings.into_iter().map(|(name, value)| Binding::new(name, value)).collect()
}
