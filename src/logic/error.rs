use thiserror::Error;

/// Closed set of failures a sample operation can surface. The three domain
/// kinds carry fixed messages that the HTTP layer emits verbatim; `Store`
/// wraps infrastructure failures from the persistence collaborator.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Sample no está en la base de datos")]
    NotFound,

    #[error("Sample ya en la base de datos")]
    AlreadyCreated,

    #[error("Sample id no coincide")]
    BadRequest,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
