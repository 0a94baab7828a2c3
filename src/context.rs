use std::{fmt, iter, sync::Arc};

use crate::reprs::Type;

pub use self::error::ContextError;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Binding {
    /// Binder of the untyped calculus.
    NameOnly,
    VariableType(Type),
}

/// The binders in scope, innermost at index 0.
///
/// A persistent list: extending shares the receiver as the parent of the new
/// context and leaves it as it was.
#[must_use]
#[derive(Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    kind: ContextKind,
    len: usize,
}

enum ContextKind {
    Nil,
    Bind {
        parent: Context,
        name: String,
        binding: Binding,
    },
}

impl Context {
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(ContextInner {
                kind: ContextKind::Nil,
                len: 0,
            }),
        }
    }

    /// Builds a context from bindings listed outermost first.
    pub fn from_bindings<N: Into<String>>(bindings: impl IntoIterator<Item = (N, Binding)>) -> Self {
        bindings
            .into_iter()
            .fold(Self::empty(), |ctx, (name, binding)| ctx.extend(name, binding))
    }

    pub fn extend(&self, name: impl Into<String>, binding: Binding) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                kind: ContextKind::Bind {
                    parent: self.clone(),
                    name: name.into(),
                    binding,
                },
                len: self.len() + 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn parent(&self) -> Option<&Context> {
        match &self.inner.kind {
            ContextKind::Nil => None,
            ContextKind::Bind { parent, .. } => Some(parent),
        }
    }

    /// Pairs in index order, innermost first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        iter::successors(Some(self), |&ctx| ctx.parent()).filter_map(|ctx| match &ctx.inner.kind {
            ContextKind::Nil => None,
            ContextKind::Bind { name, binding, .. } => Some((name.as_str(), binding)),
        })
    }

    fn entry_at(&self, index: usize) -> Result<(&str, &Binding), ContextError> {
        self.iter().nth(index).ok_or(ContextError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn binding_at(&self, index: usize) -> Result<&Binding, ContextError> {
        self.entry_at(index).map(|(_, binding)| binding)
    }

    pub fn name_at(&self, index: usize) -> Result<&str, ContextError> {
        self.entry_at(index).map(|(name, _)| name)
    }

    pub fn type_at(&self, index: usize) -> Result<&Type, ContextError> {
        match self.binding_at(index)? {
            Binding::VariableType(ty) => Ok(ty),
            Binding::NameOnly => Err(ContextError::NotATypeBinding { index }),
        }
    }

    pub fn is_name_bound(&self, name: &str) -> bool {
        self.iter().any(|(bound, _)| bound == name)
    }

    /// Picks a display name based on `hint` that is not bound yet, priming it as
    /// often as needed, and returns it with the context extended by it.
    pub fn pick_fresh_name(&self, hint: &str) -> (Self, String) {
        if self.is_name_bound(hint) {
            self.pick_fresh_name(&format!("{hint}'"))
        } else {
            (self.extend(hint, Binding::NameOnly), hint.to_string())
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Context {}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

mod error {
    use annotate_snippets::{Group, Level};

    #[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
    pub enum ContextError {
        #[error("index {index} is out of range for a context of length {len}")]
        IndexOutOfRange { index: usize, len: usize },
        #[error("binding at index {index} carries no type")]
        NotATypeBinding { index: usize },
    }

    impl ContextError {
        pub fn into_record(self) -> Vec<Group<'static>> {
            let group = Level::ERROR
                .primary_title("context lookup failed")
                .element(Level::ERROR.message(self.to_string()));

            vec![group]
        }
    }
}
