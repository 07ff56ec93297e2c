use crate::logic::error::SampleError;
use crate::model::{Page, PageRequest, Sample, SampleId};
use crate::store::traits::SampleStore;

/// Business rules around the sample store: existence checks on read, update
/// and delete, a conflict check on add, and name-only update semantics.
///
/// Constructed once at startup with an explicit store handle. Every
/// operation is a single lookup-decide-mutate-return sequence; cross-request
/// atomicity of the check-then-act is the store's concern (the primary-key
/// constraint), not this service's.
pub struct SampleService<S> {
    store: S,
}

impl<S: SampleStore> SampleService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Paged scan of the table. Delegates straight to the store; an
    /// out-of-range page comes back empty rather than failing.
    pub async fn list(&self, request: PageRequest) -> Result<Page<Sample>, SampleError> {
        let page = self.store.find_page(&request).await?;
        Ok(page)
    }

    pub async fn get_by_id(&self, id: SampleId) -> Result<Sample, SampleError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(SampleError::NotFound)
    }

    /// Persist a caller-assigned sample. A conflicting id is fatal to the
    /// call: nothing is written and the existing record stays as it was.
    pub async fn add(&self, sample: Sample) -> Result<Sample, SampleError> {
        if self.store.find_by_id(sample.id).await?.is_some() {
            return Err(SampleError::AlreadyCreated);
        }
        let created = self.store.save(sample).await?;
        Ok(created)
    }

    /// Replace the name of an existing sample. The lookup id is
    /// authoritative; there is no way to change an id through this path.
    pub async fn update(&self, id: SampleId, new_name: String) -> Result<Sample, SampleError> {
        let mut sample = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(SampleError::NotFound)?;

        sample.name = new_name;

        let updated = self.store.save(sample).await?;
        Ok(updated)
    }

    /// Alternate update contract: a full sample payload alongside the path
    /// id. The two ids must agree before the rename is delegated.
    pub async fn update_from_payload(
        &self,
        id: SampleId,
        payload: Sample,
    ) -> Result<Sample, SampleError> {
        if payload.id != id {
            return Err(SampleError::BadRequest);
        }
        self.update(id, payload.name).await
    }

    /// Remove an existing sample and hand back its last known state.
    pub async fn delete(&self, id: SampleId) -> Result<Sample, SampleError> {
        let sample = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(SampleError::NotFound)?;

        self.store.delete(&sample).await?;
        Ok(sample)
    }
}
