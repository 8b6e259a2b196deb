//! Document repositories.
//!
//! Each repository is a service struct holding a shared [`CoreConfig`] and
//! operating on one subdirectory of the data directory. Documents are plain
//! JSON files; there is no cross-document transaction and no locking. Each
//! operation is a single read or write.
//!
//! [`CoreConfig`]: crate::CoreConfig

pub mod notes;
pub mod sessions;
pub mod users;
