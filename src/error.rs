use annotate_snippets::{Group, Renderer};

use crate::{context::ContextError, typing::TypeError};

#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    TypeCheck(#[from] TypeError),
}

impl Error {
    pub fn into_record(self) -> Vec<Group<'static>> {
        match self {
            Self::Context(context_error) => context_error.into_record(),
            Self::TypeCheck(type_error) => type_error.into_record(),
        }
    }

    pub fn render_styled(self) -> String {
        Renderer::styled().render(&self.into_record())
    }
}
