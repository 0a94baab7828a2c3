//! Built-in sample terms for the three calculi, each with the result it is
//! expected to produce.

use itertools::Itertools;

use crate::{
    context::{Binding, Context},
    evaluation::{Evaluate, Strategy},
    reprs::{Term, Type},
    typing::type_of,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Calculus {
    Arithmetic,
    Untyped,
    SimplyTyped,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expected {
    Value(Term),
    Type(Type),
    TypeAndValue(Type, Term),
    /// Type checking fails with the error of this [`kind`](crate::typing::TypeError::kind).
    TypeError(&'static str),
}

#[derive(Clone, Debug)]
pub struct Sample {
    pub name: &'static str,
    pub calculus: Calculus,
    pub ctx: Context,
    pub term: Term,
    pub expected: Expected,
}

impl Sample {
    fn new(name: &'static str, calculus: Calculus, term: Term, expected: Expected) -> Self {
        Self {
            name,
            calculus,
            ctx: Context::empty(),
            term,
            expected,
        }
    }

    fn in_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Checks the sample against its expectation, under every strategy where it
    /// is evaluated.
    ///
    /// # Errors
    /// A description of every mismatch.
    pub fn check(&self) -> Result<(), String> {
        let Self { ctx, term, .. } = self;
        let mut mismatches = Vec::new();

        let mut check_value = |value: &Term| {
            for strategy in Strategy::ALL {
                let evaluated = term.evaluate(strategy, ctx);
                if evaluated != *value {
                    mismatches.push(format!(
                        "{strategy:?} evaluated to `{}`, expected `{}`",
                        evaluated.display(ctx),
                        value.display(ctx),
                    ));
                }
            }
        };
        match &self.expected {
            Expected::Value(value) => check_value(value),
            Expected::TypeAndValue(_, value) => check_value(value),
            Expected::Type(_) | Expected::TypeError(_) => {}
        }

        let typing = type_of(term, ctx);
        match (&self.expected, typing) {
            (Expected::Type(expected) | Expected::TypeAndValue(expected, _), Ok(ty))
                if ty == *expected => {}
            (Expected::Type(expected) | Expected::TypeAndValue(expected, _), result) => {
                mismatches.push(format!("expected type `{expected}`, got {result:?}"));
            }
            (Expected::TypeError(kind), Err(err)) if err.kind() == *kind => {}
            (Expected::TypeError(kind), result) => {
                mismatches.push(format!("expected {kind} error, got {result:?}"));
            }
            (Expected::Value(_), _) => {}
        }

        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(format!("sample '{}':\n  {}", self.name, mismatches.iter().join("\n  ")))
        }
    }
}

pub fn find(name: &str) -> Option<Sample> {
    catalog().into_iter().find(|sample| sample.name == name)
}

pub fn catalog() -> Vec<Sample> {
    let mut samples = arithmetic();
    samples.extend(untyped());
    samples.extend(simply_typed());
    samples
}

fn arithmetic() -> Vec<Sample> {
    use Calculus::Arithmetic;

    let value = |name, term, value| Sample::new(name, Arithmetic, term, Expected::Value(value));
    let n = Term::numeral;

    vec![
        value("true", Term::True, Term::True),
        value("false", Term::False, Term::False),
        value("zero", Term::Zero, Term::Zero),
        value("if-true", Term::cond(Term::True, n(0), n(1)), n(0)),
        value(
            "if-iszero-pred",
            Term::cond(Term::is_zero(Term::pred(n(1))), n(2), n(1)),
            n(2),
        ),
        value("if-false", Term::cond(Term::False, n(1), n(0)), n(0)),
        value(
            "if-iszero-two",
            Term::cond(
                Term::is_zero(n(2)),
                Term::pred(n(0)),
                Term::succ(Term::pred(n(0))),
            ),
            n(1),
        ),
        value("succ-numeral", n(3), n(3)),
        value("pred-zero", Term::pred(n(0)), n(0)),
        value(
            "pred-pred-pred-zero",
            Term::pred(Term::pred(Term::pred(n(0)))),
            n(0),
        ),
        value(
            "pred-pred-succ",
            Term::pred(Term::pred(Term::succ(Term::pred(n(1))))),
            n(0),
        ),
        value("pred-succ", Term::pred(n(1)), n(0)),
        value(
            "pred-succ-succ",
            Term::pred(Term::succ(Term::succ(Term::pred(n(1))))),
            n(1),
        ),
        value("iszero-zero", Term::is_zero(n(0)), Term::True),
        value("iszero-pred-zero", Term::is_zero(Term::pred(n(0))), Term::True),
        value(
            "iszero-pred-succ",
            Term::is_zero(Term::pred(Term::succ(Term::pred(Term::pred(n(0)))))),
            Term::True,
        ),
        value("iszero-one", Term::is_zero(n(1)), Term::False),
        value("iszero-two", Term::is_zero(n(2)), Term::False),
        value(
            "iszero-succ-pred",
            Term::is_zero(Term::succ(Term::pred(Term::succ(Term::pred(Term::pred(
                n(0),
            )))))),
            Term::False,
        ),
        value("stuck-succ-true", Term::succ(Term::True), Term::succ(Term::True)),
    ]
}

fn untyped() -> Vec<Sample> {
    use Calculus::Untyped;

    let value = |name, term, value| Sample::new(name, Untyped, term, Expected::Value(value));
    fn names(names: &[&str]) -> Context {
        Context::from_bindings(names.iter().map(|name| (*name, Binding::NameOnly)))
    }
    let v = Term::var;
    let lam = Term::untyped_abs;

    vec![
        value("free-variable", v(0, 1), v(0, 1)).in_context(names(&["x"])),
        value("identity", lam("x", v(0, 1)), lam("x", v(0, 1))),
        value(
            "free-application",
            Term::app(v(0, 2), v(1, 2)),
            Term::app(v(0, 2), v(1, 2)),
        )
        .in_context(names(&["a", "b"])),
        value(
            "free-variable-substitution",
            Term::app(lam("x1", v(0, 2)), lam("x2", v(1, 2))),
            lam("x2", v(1, 2)),
        )
        .in_context(names(&["z"])),
        value(
            "identity-of-self-application",
            Term::app(
                Term::app(lam("x", v(0, 1)), lam("x", Term::app(v(0, 1), v(0, 1)))),
                lam("y", Term::app(lam("x", v(0, 2)), lam("x", v(0, 2)))),
            ),
            lam("x", v(0, 1)),
        ),
        value(
            "capture-avoiding",
            Term::app(lam("x", lam("y", v(1, 3))), lam("w", v(1, 2))),
            lam("y", lam("w", v(2, 3))),
        )
        .in_context(names(&["z"])),
    ]
}

fn simply_typed() -> Vec<Sample> {
    use Calculus::SimplyTyped;

    let has_type = |name, term, ty| Sample::new(name, SimplyTyped, term, Expected::Type(ty));
    let fails = |name, term, kind| Sample::new(name, SimplyTyped, term, Expected::TypeError(kind));
    let id = |name: &str| Term::abs(name, Type::Bool, Term::var(0, 1));
    let bool_to_bool = || Type::arrow(Type::Bool, Type::Bool);

    vec![
        has_type("typed-true", Term::True, Type::Bool),
        has_type("typed-false", Term::False, Type::Bool),
        has_type(
            "typed-if",
            Term::cond(Term::True, Term::False, Term::True),
            Type::Bool,
        ),
        has_type("typed-identity", id("x"), bool_to_bool()),
        Sample::new(
            "typed-application",
            SimplyTyped,
            Term::app(id("x"), Term::True),
            Expected::TypeAndValue(Type::Bool, Term::True),
        ),
        Sample::new(
            "typed-if-of-functions",
            SimplyTyped,
            Term::app(Term::cond(Term::False, id("x"), id("y")), Term::True),
            Expected::TypeAndValue(Type::Bool, Term::True),
        ),
        Sample::new(
            "typed-nested-if",
            SimplyTyped,
            Term::app(
                Term::cond(
                    Term::app(Term::cond(Term::True, id("x"), id("y")), Term::False),
                    id("x"),
                    id("y"),
                ),
                Term::True,
            ),
            Expected::TypeAndValue(Type::Bool, Term::True),
        ),
        fails("untyped-binding", Term::var(0, 1), "variable not found")
            .in_context(Context::empty().extend("x", Binding::NameOnly)),
        fails(
            "parameter-mismatch",
            Term::app(Term::abs("x", bool_to_bool(), Term::var(0, 1)), Term::True),
            "parameter mismatch",
        ),
        fails(
            "apply-non-function",
            Term::app(Term::True, id("x")),
            "unexpected type",
        ),
        fails(
            "arms-mismatch",
            Term::cond(Term::True, id("x"), Term::False),
            "conditional arms mismatch",
        ),
        fails(
            "guard-not-bool",
            Term::cond(id("x"), Term::True, Term::False),
            "guard not bool",
        ),
    ]
}
