use annotate_snippets::{Group, Level};

use crate::{
    context::ContextError,
    reprs::{Term, Type},
};

#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum TypeError {
    #[error("variable {index} has no type in scope")]
    VariableNotFound { index: usize, cause: ContextError },
    #[error("parameter type mismatch: expected `{expected}`, found `{found}`")]
    ParameterMismatch { expected: Type, found: Type },
    #[error("cannot apply an argument to type `{found}`")]
    UnexpectedType { found: Type },
    #[error("conditional arms differ: `{then_ty}` and `{else_ty}`")]
    ConditionalArmsMismatch { then_ty: Type, else_ty: Type },
    #[error("guard of conditional must be `Bool`, found `{found}`")]
    GuardNotBool { found: Type },

    #[error("parameter `{name}` has no type annotation")]
    MissingParameterType { name: String },
    #[error("term is outside the simply-typed calculus: {term:?}")]
    UnsupportedTerm { term: Term },
}

impl TypeError {
    /// Short name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::VariableNotFound { .. } => "variable not found",
            Self::ParameterMismatch { .. } => "parameter mismatch",
            Self::UnexpectedType { .. } => "unexpected type",
            Self::ConditionalArmsMismatch { .. } => "conditional arms mismatch",
            Self::GuardNotBool { .. } => "guard not bool",
            Self::MissingParameterType { .. } => "missing parameter type",
            Self::UnsupportedTerm { .. } => "unsupported term",
        }
    }

    pub fn into_record(self) -> Vec<Group<'static>> {
        let title = format!("type error: {}", self.kind());
        let mut group = Level::ERROR
            .primary_title(title)
            .element(Level::ERROR.message(self.to_string()));

        match self {
            Self::VariableNotFound { cause, .. } => {
                group = group.element(Level::NOTE.message(cause.to_string()));
            }
            Self::ParameterMismatch { expected, found } => {
                group = group.element(Level::NOTE.message(format!(
                    "expected: `{expected}`\n\
                    found:    `{found}`"
                )));
            }
            Self::UnexpectedType { .. } => {
                group = group.element(Level::HELP.message("only functions can be applied"));
            }
            Self::ConditionalArmsMismatch { .. }
            | Self::GuardNotBool { .. }
            | Self::MissingParameterType { .. }
            | Self::UnsupportedTerm { .. } => {}
        }

        vec![group]
    }
}
