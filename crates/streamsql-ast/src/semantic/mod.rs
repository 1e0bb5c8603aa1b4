pub mod aggregate;
pub mod config;
pub mod field_refs;
pub mod validator;
