use serde::{Deserialize, Serialize};

/// Caller-assigned primary key. The service never generates ids.
pub type SampleId = i64;

/// The managed entity: an (id, name) pair persisted as one row.
///
/// `id` is immutable once created; `name` is the only mutable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub id: SampleId,
    pub name: String,
}

impl Sample {
    pub fn new(id: SampleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
