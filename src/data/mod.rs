//! In-memory stores backing the HTTP API: the dog registry and the post log.

pub mod dog;
pub mod post;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Dog not found")]
    DogNotFound { pk: i64 },

    /// A previous holder of the store lock panicked mid-mutation.
    #[error("{store} lock poisoned")]
    Poisoned { store: &'static str },
}
