//! Recursive-descent grammar validator for IBE token streams.
//!
//! A program is accepted when it matches
//!
//! ```text
//! Integer a, b;
//! Begin
//!     a := -(b + 1) * 2;
//! End
//! ```
//!
//! and rejected with the first [`Violation`](ibe_syntax::Violation) otherwise.

pub mod cursor;
mod rules;
pub mod validator;

pub use cursor::Cursor;
pub use validator::{validate, Options, Validator};
