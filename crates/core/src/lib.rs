//! Functional core for itemsync.
//!
//! Pure data types, validation, key derivation and the storage contracts shared by
//! the server and its backends. Nothing in this crate performs I/O.

pub mod item;
pub mod provision;
pub mod storage;
