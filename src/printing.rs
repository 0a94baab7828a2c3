//! Reconstructs names for de Bruijn terms.

use crate::{context::Context, reprs::Term};

impl Term {
    /// Renders the term with every binder given a name not yet bound in `ctx`.
    pub fn display(&self, ctx: &Context) -> String {
        let mut string = String::new();
        self.write_display(ctx, &mut string);
        string
    }

    fn write_display(&self, ctx: &Context, w: &mut String) {
        match self {
            Term::Var { index, context_len } => match ctx.name_at(*index) {
                Ok(name) if ctx.len() == *context_len => w.push_str(name),
                _ => w.push_str("[bad index]"),
            },
            Term::Abs {
                name,
                param_ty,
                body,
            } => {
                let (ctx_, name) = ctx.pick_fresh_name(name);
                w.push_str("(lambda ");
                w.push_str(&name);
                if let Some(param_ty) = param_ty {
                    w.push(':');
                    w.push_str(&param_ty.to_string());
                }
                w.push_str(". ");
                body.write_display(&ctx_, w);
                w.push(')');
            }
            Term::App { func, arg } => {
                w.push('(');
                func.write_display(ctx, w);
                w.push(' ');
                arg.write_display(ctx, w);
                w.push(')');
            }
            Term::True => w.push_str("true"),
            Term::False => w.push_str("false"),
            Term::If {
                cond,
                then_branch,
                else_branch,
            } => {
                w.push_str("(if ");
                cond.write_display(ctx, w);
                w.push_str(" then ");
                then_branch.write_display(ctx, w);
                w.push_str(" else ");
                else_branch.write_display(ctx, w);
                w.push(')');
            }
            Term::Zero => w.push('0'),
            Term::Succ(term) => {
                if let Some(n) = self.as_numeral() {
                    w.push_str(&n.to_string());
                } else {
                    w.push_str("(succ ");
                    term.write_display(ctx, w);
                    w.push(')');
                }
            }
            Term::Pred(term) => {
                w.push_str("(pred ");
                term.write_display(ctx, w);
                w.push(')');
            }
            Term::IsZero(term) => {
                w.push_str("(iszero ");
                term.write_display(ctx, w);
                w.push(')');
            }
        }
    }

    fn as_numeral(&self) -> Option<usize> {
        match self {
            Term::Zero => Some(0),
            Term::Succ(term) => term.as_numeral().map(|n| n + 1),
            _ => None,
        }
    }
}
