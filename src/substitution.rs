//! Shifting and substitution on de Bruijn terms.
//!
//! Both operations walk the term keeping a cutoff, the number of binders
//! entered since the walk started. A variable whose index is at least the
//! cutoff is free relative to the starting point of the walk.

use crate::reprs::Term;

fn offset(index: usize, d: isize) -> usize {
    index
        .checked_add_signed(d)
        .unwrap_or_else(|| panic!("de Bruijn index shifted below zero: {index} + {d}"))
}

/// Context lengths only matter for printing, so a malformed one stops at zero.
fn offset_len(context_len: usize, d: isize) -> usize {
    context_len.saturating_add_signed(d)
}

impl Term {
    /// Rebuilds the term, replacing every variable by `on_var(index, context_len, cutoff)`.
    fn map_vars(&self, on_var: &impl Fn(usize, usize, usize) -> Term) -> Term {
        fn walk(term: &Term, cutoff: usize, on_var: &impl Fn(usize, usize, usize) -> Term) -> Term {
            let walk_box = |term: &Term| Box::new(walk(term, cutoff, on_var));
            match term {
                Term::Var { index, context_len } => on_var(*index, *context_len, cutoff),
                Term::Abs {
                    name,
                    param_ty,
                    body,
                } => Term::Abs {
                    name: name.clone(),
                    param_ty: param_ty.clone(),
                    body: Box::new(walk(body, cutoff + 1, on_var)),
                },
                Term::App { func, arg } => Term::App {
                    func: walk_box(func),
                    arg: walk_box(arg),
                },
                Term::True => Term::True,
                Term::False => Term::False,
                Term::If {
                    cond,
                    then_branch,
                    else_branch,
                } => Term::If {
                    cond: walk_box(cond),
                    then_branch: walk_box(then_branch),
                    else_branch: walk_box(else_branch),
                },
                Term::Zero => Term::Zero,
                Term::Succ(term) => Term::Succ(walk_box(term)),
                Term::Pred(term) => Term::Pred(walk_box(term)),
                Term::IsZero(term) => Term::IsZero(walk_box(term)),
            }
        }
        walk(self, 0, on_var)
    }

    /// Adds `d` to every free variable index, adjusting every context length by `d`.
    ///
    /// # Panics
    /// If a free index would drop below zero.
    pub fn shifted(&self, d: isize) -> Term {
        self.map_vars(&|index, context_len, cutoff| {
            if index >= cutoff {
                Term::var(offset(index, d), offset_len(context_len, d))
            } else {
                Term::var(index, offset_len(context_len, d))
            }
        })
    }

    /// Replaces variable `j` by `term`.
    pub fn substituted(&self, j: usize, term: &Term) -> Term {
        self.map_vars(&|index, context_len, cutoff| {
            if index == j + cutoff {
                // `cutoff` is at most the depth of the term, far below `isize::MAX`
                term.shifted(cutoff as isize)
            } else {
                Term::var(index, context_len)
            }
        })
    }

    /// Beta-reduces with `self` as the body of an abstraction applied to `arg`.
    pub fn substituted_top(&self, arg: &Term) -> Term {
        self.substituted(0, &arg.shifted(1)).shifted(-1)
    }
}
