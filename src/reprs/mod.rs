pub mod term;
pub mod ty;

pub use self::term::Term;
pub use self::ty::Type;
