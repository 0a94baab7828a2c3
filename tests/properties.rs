use proptest::{prelude::*, strategy::Union};

use tapl_calculi::{
    context::{Binding, Context},
    evaluation::{Evaluate, Strategy as EvalStrategy},
    reprs::{Term, Type},
    typing::type_of,
};

// -----------------------------
// Generators
// -----------------------------

fn bool_to_bool() -> Type {
    Type::arrow(Type::Bool, Type::Bool)
}

/// Closed-over-`env` terms of type `ty`, where `env` lists binder types outermost first.
fn typed_term(ty: Type, env: Vec<Type>, depth: u32) -> BoxedStrategy<Term> {
    let mut options: Vec<BoxedStrategy<Term>> = Vec::new();

    let len = env.len();
    for (pos, var_ty) in env.iter().enumerate() {
        if *var_ty == ty {
            options.push(Just(Term::var(len - 1 - pos, len)).boxed());
        }
    }

    match &ty {
        Type::Bool => {
            options.push(Just(Term::True).boxed());
            options.push(Just(Term::False).boxed());
        }
        Type::Arrow { from, to } => {
            let mut env_ = env.clone();
            env_.push((**from).clone());
            let from = (**from).clone();
            options.push(
                ("[xyz]", typed_term((**to).clone(), env_, depth.saturating_sub(1)))
                    .prop_map(move |(name, body)| Term::abs(name, from.clone(), body))
                    .boxed(),
            );
        }
    }

    if depth > 0 {
        options.push(
            (
                typed_term(Type::Bool, env.clone(), depth - 1),
                typed_term(ty.clone(), env.clone(), depth - 1),
                typed_term(ty.clone(), env.clone(), depth - 1),
            )
                .prop_map(|(cond, then_branch, else_branch)| {
                    Term::cond(cond, then_branch, else_branch)
                })
                .boxed(),
        );
        for arg_ty in [Type::Bool, bool_to_bool()] {
            options.push(
                (
                    typed_term(Type::arrow(arg_ty.clone(), ty.clone()), env.clone(), depth - 1),
                    typed_term(arg_ty, env.clone(), depth - 1),
                )
                    .prop_map(|(func, arg)| Term::app(func, arg))
                    .boxed(),
            );
        }
    }

    Union::new(options).boxed()
}

fn closed_typed_term() -> impl Strategy<Value = Term> {
    prop_oneof![Just(Type::Bool), Just(bool_to_bool())]
        .prop_flat_map(|ty| typed_term(ty, Vec::new(), 3))
}

fn arithmetic_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![Just(Term::True), Just(Term::False), Just(Term::Zero)];
    leaf.prop_recursive(5, 48, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(cond, then_branch, else_branch)| Term::cond(
                    cond,
                    then_branch,
                    else_branch
                )),
            inner.clone().prop_map(Term::succ),
            inner.clone().prop_map(Term::pred),
            inner.prop_map(Term::is_zero),
        ]
    })
}

fn closed_value() -> impl Strategy<Value = Term> {
    prop_oneof![
        Just(Term::True),
        Just(Term::False),
        (0..5usize).prop_map(Term::numeral),
        Just(Term::untyped_abs("y", Term::var(0, 1))),
    ]
}

/// Any term, with variables pointing anywhere.
fn raw_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        (0..4usize, 0..4usize).prop_map(|(index, context_len)| Term::var(index, context_len)),
        Just(Term::True),
        Just(Term::Zero),
    ];
    leaf.prop_recursive(5, 48, 3, |inner| {
        prop_oneof![
            ("[xyz]", inner.clone()).prop_map(|(name, body)| Term::untyped_abs(name, body)),
            (inner.clone(), inner.clone()).prop_map(|(func, arg)| Term::app(func, arg)),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(cond, then_branch, else_branch)| Term::cond(
                    cond,
                    then_branch,
                    else_branch
                )),
            inner.prop_map(Term::succ),
        ]
    })
}

/// Rewrites every variable to point into `outer` enclosing binders plus those inside `term`.
/// Variables with nothing to point at become `true`.
fn scoped(term: &Term, outer: usize) -> Term {
    let scoped_box = |term: &Term| Box::new(scoped(term, outer));
    match term {
        Term::Var { .. } if outer == 0 => Term::True,
        Term::Var { index, .. } => Term::var(index % outer, outer),
        Term::Abs {
            name,
            param_ty,
            body,
        } => Term::Abs {
            name: name.clone(),
            param_ty: param_ty.clone(),
            body: Box::new(scoped(body, outer + 1)),
        },
        Term::App { func, arg } => Term::App {
            func: scoped_box(func),
            arg: scoped_box(arg),
        },
        Term::If {
            cond,
            then_branch,
            else_branch,
        } => Term::If {
            cond: scoped_box(cond),
            then_branch: scoped_box(then_branch),
            else_branch: scoped_box(else_branch),
        },
        Term::Succ(term) => Term::Succ(scoped_box(term)),
        Term::Pred(term) => Term::Pred(scoped_box(term)),
        Term::IsZero(term) => Term::IsZero(scoped_box(term)),
        Term::True | Term::False | Term::Zero => term.clone(),
    }
}

// -----------------------------
// Properties
// -----------------------------

proptest! {
    #[test]
    fn generated_terms_are_well_typed(term in closed_typed_term()) {
        prop_assert!(type_of(&term, &Context::empty()).is_ok());
    }

    #[test]
    fn strategies_agree_on_well_typed_terms(term in closed_typed_term()) {
        let ctx = Context::empty();
        prop_assert_eq!(
            term.evaluate(EvalStrategy::SingleStep, &ctx),
            term.evaluate(EvalStrategy::FullReduction, &ctx)
        );
    }

    #[test]
    fn strategies_agree_on_arithmetic_terms(term in arithmetic_term()) {
        let ctx = Context::empty();
        prop_assert_eq!(
            term.evaluate(EvalStrategy::SingleStep, &ctx),
            term.evaluate(EvalStrategy::FullReduction, &ctx)
        );
    }

    #[test]
    fn steps_preserve_types(term in closed_typed_term()) {
        let ctx = Context::empty();
        let ty = type_of(&term, &ctx);
        for step in term.steps(&ctx) {
            prop_assert_eq!(&type_of(&step, &ctx), &ty);
        }
    }

    #[test]
    fn well_typed_terms_never_get_stuck(term in closed_typed_term()) {
        let ctx = Context::empty();
        let last = term.evaluate(EvalStrategy::SingleStep, &ctx);
        prop_assert!(last.is_value(), "stuck at {:?}", last);
        for step in term.steps(&ctx) {
            prop_assert!(step.is_value() || step.eval1(&ctx).is_ok());
        }
    }

    #[test]
    fn shift_by_zero_is_identity(term in raw_term()) {
        prop_assert_eq!(term.shifted(0), term);
    }

    #[test]
    fn beta_step_matches_substitute_top(body in raw_term(), arg in closed_value()) {
        let body = scoped(&body, 1);
        let redex = Term::app(Term::untyped_abs("x", body.clone()), arg.clone());
        prop_assert_eq!(redex.eval1(&Context::empty()), Ok(body.substituted_top(&arg)));
    }

    #[test]
    fn fresh_names_are_unbound(
        bound in proptest::collection::vec("[ab]'{0,3}", 0..8),
        hint in "[ab]",
    ) {
        let ctx = Context::from_bindings(bound.iter().map(|name| (name.as_str(), Binding::NameOnly)));
        let (ctx_, name) = ctx.pick_fresh_name(&hint);
        prop_assert!(!ctx.is_name_bound(&name));
        prop_assert!(name.starts_with(&hint));
        prop_assert_eq!(ctx_.name_at(0), Ok(name.as_str()));
        prop_assert_eq!(ctx_.len(), ctx.len() + 1);
    }
}
