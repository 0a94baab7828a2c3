use crate::reprs::ty::Type;

/// A term of the arithmetic, untyped and simply-typed calculi, with variables
/// given as de Bruijn indices.
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub enum Term {
    Var {
        index: usize,
        /// Length of the context the variable was created in, only checked when printing.
        context_len: usize,
    },
    Abs {
        name: String,
        param_ty: Option<Type>,

        body: Box<Term>,
    },
    App {
        func: Box<Term>,
        arg: Box<Term>,
    },

    True,
    False,
    If {
        cond: Box<Term>,
        then_branch: Box<Term>,
        else_branch: Box<Term>,
    },

    Zero,
    Succ(Box<Term>),
    Pred(Box<Term>),
    IsZero(Box<Term>),
}

impl Term {
    pub fn var(index: usize, context_len: usize) -> Self {
        Self::Var { index, context_len }
    }

    pub fn abs(name: impl Into<String>, param_ty: Type, body: Term) -> Self {
        Self::Abs {
            name: name.into(),
            param_ty: Some(param_ty),
            body: Box::new(body),
        }
    }

    pub fn untyped_abs(name: impl Into<String>, body: Term) -> Self {
        Self::Abs {
            name: name.into(),
            param_ty: None,
            body: Box::new(body),
        }
    }

    pub fn app(func: Term, arg: Term) -> Self {
        Self::App {
            func: Box::new(func),
            arg: Box::new(arg),
        }
    }

    pub fn cond(cond: Term, then_branch: Term, else_branch: Term) -> Self {
        Self::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn succ(term: Term) -> Self {
        Self::Succ(Box::new(term))
    }

    pub fn pred(term: Term) -> Self {
        Self::Pred(Box::new(term))
    }

    pub fn is_zero(term: Term) -> Self {
        Self::IsZero(Box::new(term))
    }

    /// `succ` applied `n` times to `zero`.
    pub fn numeral(n: usize) -> Self {
        (0..n).fold(Self::Zero, |term, _| Self::succ(term))
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}
