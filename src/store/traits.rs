use crate::model::{Page, PageRequest, Sample, SampleId};
use anyhow::Result;

/// Keyed persistence collaborator for `Sample` rows.
///
/// The store holds exactly one record per id. `save` is an upsert; the
/// existence rules (reject duplicate add, reject missing update/delete)
/// belong to the service, not here.
#[async_trait::async_trait]
pub trait SampleStore: Send + Sync {
    async fn find_by_id(&self, id: SampleId) -> Result<Option<Sample>>;

    /// Ordered slice of the table plus the total row count. An offset past
    /// the end yields an empty page, not an error.
    async fn find_page(&self, request: &PageRequest) -> Result<Page<Sample>>;

    /// Insert if the id is absent, otherwise overwrite in place.
    async fn save(&self, sample: Sample) -> Result<Sample>;

    /// Removing an absent row is not an error; callers check existence first.
    async fn delete(&self, sample: &Sample) -> Result<()>;
}
