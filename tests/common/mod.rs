#![allow(dead_code)]

use pretty_assertions::assert_eq;

use tapl_calculi::{
    context::{Binding, Context},
    evaluation::{Evaluate, Strategy},
    reprs::{Term, Type},
    typing::{TypeError, type_of},
};

#[track_caller]
pub fn evaluates_to_in(ctx: &Context, term: &Term, expected: &Term) {
    for strategy in Strategy::ALL {
        assert_eq!(
            &term.evaluate(strategy, ctx),
            expected,
            "evaluation failed for strategy {strategy:?}:\n{}",
            term.display(ctx)
        );
    }
}

#[track_caller]
pub fn evaluates_to(term: &Term, expected: &Term) {
    evaluates_to_in(&Context::empty(), term, expected)
}

#[track_caller]
pub fn type_check_success(term: &Term) -> Type {
    match type_of(term, &Context::empty()) {
        Ok(ty) => ty,
        Err(e) => panic!("type check failure:\n{}\n{e}", term.display(&Context::empty())),
    }
}

#[track_caller]
pub fn type_check_failure_in(ctx: &Context, term: &Term) -> TypeError {
    match type_of(term, ctx) {
        Ok(ty) => panic!("type check success:\n{}\n{ty}", term.display(ctx)),
        Err(e) => e,
    }
}

#[track_caller]
pub fn type_check_failure(term: &Term) -> TypeError {
    type_check_failure_in(&Context::empty(), term)
}

pub fn names(names: &[&str]) -> Context {
    Context::from_bindings(names.iter().map(|name| (*name, Binding::NameOnly)))
}

pub fn id(name: &str) -> Term {
    Term::abs(name, Type::Bool, Term::var(0, 1))
}

pub fn bool_to_bool() -> Type {
    Type::arrow(Type::Bool, Type::Bool)
}
