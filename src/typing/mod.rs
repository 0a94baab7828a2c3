use log::trace;

use crate::{
    context::{Binding, Context},
    reprs::{Term, Type},
};

pub use self::error::TypeError;

mod error;

trait TypeCheck {
    fn type_check(&self, ctx: &Context) -> Result<Type, TypeError>;
}

/// Computes the type of `term` in `ctx`, stopping at the first ill-typed subterm.
///
/// # Errors
/// When `term` is ill-typed, or not part of the simply-typed calculus.
pub fn type_of(term: &Term, ctx: &Context) -> Result<Type, TypeError> {
    term.type_check(ctx)
}

impl<T: TypeCheck> TypeCheck for Box<T> {
    fn type_check(&self, ctx: &Context) -> Result<Type, TypeError> {
        T::type_check(self, ctx)
    }
}

impl TypeCheck for Term {
    fn type_check(&self, ctx: &Context) -> Result<Type, TypeError> {
        let ty = match self {
            Term::Var { index, .. } => ctx
                .type_at(*index)
                .map_err(|cause| TypeError::VariableNotFound {
                    index: *index,
                    cause,
                })?
                .clone(),
            Term::Abs {
                name,
                param_ty,
                body,
            } => {
                let Some(param_ty) = param_ty else {
                    return Err(TypeError::MissingParameterType { name: name.clone() });
                };

                let ctx_ = ctx.extend(name.clone(), Binding::VariableType(param_ty.clone()));
                let body_ty = body.type_check(&ctx_)?;

                Type::arrow(param_ty.clone(), body_ty)
            }
            Term::App { func, arg } => {
                let func_ty = func.type_check(ctx)?;
                let arg_ty = arg.type_check(ctx)?;
                match func_ty {
                    Type::Arrow { from, to } if *from == arg_ty => {
                        trace!("application of {from} -> {to} to {arg_ty}");
                        *to
                    }
                    Type::Arrow { from, .. } => {
                        return Err(TypeError::ParameterMismatch {
                            expected: *from,
                            found: arg_ty,
                        });
                    }
                    func_ty => return Err(TypeError::UnexpectedType { found: func_ty }),
                }
            }
            Term::True | Term::False => Type::Bool,
            Term::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond_ty = cond.type_check(ctx)?;
                if cond_ty != Type::Bool {
                    return Err(TypeError::GuardNotBool { found: cond_ty });
                }

                let then_ty = then_branch.type_check(ctx)?;
                let else_ty = else_branch.type_check(ctx)?;
                if then_ty != else_ty {
                    return Err(TypeError::ConditionalArmsMismatch { then_ty, else_ty });
                }
                trace!("conditional with arms of type {then_ty}");
                then_ty
            }
            Term::Zero | Term::Succ(_) | Term::Pred(_) | Term::IsZero(_) => {
                return Err(TypeError::UnsupportedTerm {
                    term: self.clone(),
                });
            }
        };
        Ok(ty)
    }
}
