//! Item service: the dual-write orchestration between the item table and the blob
//! store.
//!
//! The table is authoritative. Every mutation hits the table first and then mirrors
//! the change to the blob store. Blob failures after a successful table write are
//! logged and swallowed; the caller still sees success.

mod items;

pub use items::ItemService;
