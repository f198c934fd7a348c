#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! A small, self-contained in-memory JSON value tree.
//!
//! This crate parses a JSON text into a [`Value`] tree, lets you mutate
//! that tree through a set of typed accessors and container operations,
//! and serializes it back to JSON text. Numbers are stored as `f64`;
//! strings are owned, UTF-8-encoded `String`s that may contain embedded
//! NUL bytes.
//!
//! ```
//! use lynx_value::{parse, stringify, Value};
//!
//! let v = parse(r#"{"n":null,"a":[1,2,3]}"#).unwrap();
//! assert_eq!(stringify(&v), r#"{"n":null,"a":[1,2,3]}"#);
//! ```
//!
//! The library does no I/O, no logging, and has zero third-party
//! dependencies: it only needs `alloc`.

extern crate alloc;

mod array;
mod error;
mod object;
mod parser;
mod serializer;
mod value;

pub use error::ParseError;
pub use parser::parse;
pub use serializer::stringify;
pub use value::{move_into, swap, Member, Value};
