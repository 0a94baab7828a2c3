pub mod context;
pub mod error;
pub mod printing;
pub mod reprs;
pub mod samples;
pub mod substitution;

pub mod evaluation;
pub mod typing;
