//! Formula domain layer
//!
//! Pure business logic for turning a product's bill of materials into
//! INCI composition tables. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
