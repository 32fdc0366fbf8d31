//! Pattern text handling: everything that happens before a state is allocated.

mod concat;
mod postfix;
mod validate;

#[cfg(test)]
mod concat_tests;
#[cfg(test)]
mod validate_tests;

pub use concat::insert_concat;
pub use postfix::{Postfix, Token, to_postfix};
pub use validate::validate;
