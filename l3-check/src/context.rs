use std::collections::BTreeSet;

use l3_syntax::Identifier;

/// The names in scope at some point of the traversal.
///
/// A `Context` is never modified once built. Extending one links the new names to their parent by
/// reference, so a callee can never alter what its caller sees.
#[derive(Debug, Default)]
pub struct Context<'parent> {
    names:  BTreeSet<Identifier>,
    parent: Option<&'parent Context<'parent>>,
}

impl Context<'static> {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A root context holding exactly `names`, with nothing inherited.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a Identifier>) -> Self {
        Self {
            names:  names.into_iter().cloned().collect(),
            parent: None,
        }
    }
}

impl<'parent> Context<'parent> {
    /// A child context: everything in `self` plus `names`.
    pub fn extend<'a, 'n>(
        &'a self,
        names: impl IntoIterator<Item = &'n Identifier>,
    ) -> Context<'a> {
        Context {
            names:  names.into_iter().cloned().collect(),
            parent: Some(self),
        }
    }

    pub fn contains(
        &self,
        name: &Identifier,
    ) -> bool {
        self.names.contains(name) || self.parent.is_some_and(|parent| parent.contains(name))
    }
}
