//! Grappelli Auth Pages - authentication UI components.
//!
//! Currently ships the registration form: three metadata-driven fields
//! and a submit button wired to a caller-supplied callback.

#![warn(missing_docs)]

pub mod register;

pub use register::{RegisterFields, RegisterForm, RegisterFormProps};
