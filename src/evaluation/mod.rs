use std::iter;

use log::{debug, trace};

use crate::{context::Context, reprs::Term};

pub use self::error::NoRuleApplies;

mod error {
    /// No reduction rule matches: the term is a value or it is stuck.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
    #[error("no rule applies")]
    pub struct NoRuleApplies;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Strategy {
    /// Apply single steps until none applies.
    SingleStep,
    /// Reduce by direct recursion, without materialising intermediate steps.
    FullReduction,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::SingleStep, Strategy::FullReduction];
}

/// Something with a small-step and a big-step semantics over a `Context`.
pub trait Evaluate: Clone {
    type Context;

    /// Performs a single reduction step.
    ///
    /// # Errors
    /// When no rule applies, which is how evaluation ends rather than a failure.
    fn eval1(&self, ctx: &Self::Context) -> Result<Self, NoRuleApplies>;

    /// Reduces to the term repeated `eval1` steps end at, by direct recursion.
    ///
    /// A stuck application whose function position does not reduce to a value
    /// keeps its argument as written, since single steps never reach it either.
    fn eval_n(&self, ctx: &Self::Context) -> Self;

    /// Every term reached by repeated single steps, starting with the first step
    /// (so an irreducible term yields nothing).
    fn steps<'s>(&'s self, ctx: &'s Self::Context) -> impl Iterator<Item = Self> {
        iter::successors(self.eval1(ctx).ok(), move |term| term.eval1(ctx).ok())
    }

    fn evaluate(&self, strategy: Strategy, ctx: &Self::Context) -> Self {
        debug!("evaluating with strategy {strategy:?}");
        match strategy {
            Strategy::SingleStep => self.steps(ctx).last().unwrap_or_else(|| self.clone()),
            Strategy::FullReduction => self.eval_n(ctx),
        }
    }
}

impl Term {
    pub fn is_numeric_value(&self) -> bool {
        match self {
            Term::Zero => true,
            Term::Succ(term) => term.is_numeric_value(),
            _ => false,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Term::Abs { .. } | Term::True | Term::False) || self.is_numeric_value()
    }

    fn beta_reduce(body: &Term, arg: &Term) -> Term {
        let reduced = body.substituted_top(arg);
        trace!("beta: {body:?} [{arg:?}] => {reduced:?}");
        reduced
    }
}

impl Evaluate for Term {
    type Context = Context;

    fn eval1(&self, ctx: &Context) -> Result<Term, NoRuleApplies> {
        let term = match self {
            Term::App { func, arg } => match &**func {
                Term::Abs { body, .. } if arg.is_value() => Term::beta_reduce(body, arg),
                func if func.is_value() => Term::app(func.clone(), arg.eval1(ctx)?),
                func => Term::app(func.eval1(ctx)?, (**arg).clone()),
            },

            Term::If {
                cond,
                then_branch,
                else_branch,
            } => match &**cond {
                Term::True => (**then_branch).clone(),
                Term::False => (**else_branch).clone(),
                cond => Term::cond(
                    cond.eval1(ctx)?,
                    (**then_branch).clone(),
                    (**else_branch).clone(),
                ),
            },

            Term::Succ(term) => Term::succ(term.eval1(ctx)?),
            Term::Pred(term) => match &**term {
                Term::Zero => Term::Zero,
                Term::Succ(nv) if nv.is_numeric_value() => (**nv).clone(),
                term => Term::pred(term.eval1(ctx)?),
            },
            Term::IsZero(term) => match &**term {
                Term::Zero => Term::True,
                Term::Succ(nv) if nv.is_numeric_value() => Term::False,
                term => Term::is_zero(term.eval1(ctx)?),
            },

            Term::Var { .. } | Term::Abs { .. } | Term::True | Term::False | Term::Zero => {
                return Err(NoRuleApplies);
            }
        };
        Ok(term)
    }

    fn eval_n(&self, ctx: &Context) -> Term {
        match self {
            Term::App { func, arg } => {
                let func = func.eval_n(ctx);
                // call-by-value never touches the argument of a stuck function
                if !func.is_value() {
                    return Term::app(func, (**arg).clone());
                }
                let arg = arg.eval_n(ctx);
                match &func {
                    Term::Abs { body, .. } if arg.is_value() => {
                        Term::beta_reduce(body, &arg).eval_n(ctx)
                    }
                    _ => Term::app(func, arg),
                }
            }

            Term::If {
                cond,
                then_branch,
                else_branch,
            } => match cond.eval_n(ctx) {
                Term::True => then_branch.eval_n(ctx),
                Term::False => else_branch.eval_n(ctx),
                cond => Term::cond(cond, (**then_branch).clone(), (**else_branch).clone()),
            },

            Term::Succ(term) => Term::succ(term.eval_n(ctx)),
            Term::Pred(term) => match term.eval_n(ctx) {
                Term::Zero => Term::Zero,
                Term::Succ(nv) if nv.is_numeric_value() => *nv,
                term => Term::pred(term),
            },
            Term::IsZero(term) => match term.eval_n(ctx) {
                Term::Zero => Term::True,
                Term::Succ(nv) if nv.is_numeric_value() => Term::False,
                term => Term::is_zero(term),
            },

            Term::Var { .. } | Term::Abs { .. } | Term::True | Term::False | Term::Zero => {
                self.clone()
            }
        }
    }
}

/// Evaluates `term` in `ctx` with `strategy`.
pub fn evaluate(term: &Term, ctx: &Context, strategy: Strategy) -> Term {
    term.evaluate(strategy, ctx)
}
