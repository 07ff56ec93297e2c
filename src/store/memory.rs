use std::collections::BTreeMap;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::model::{Page, PageRequest, Sample, SampleId, SortDirection, SortField};
use crate::store::traits::SampleStore;

/// In-memory store keyed by sample id. Backs unit and integration tests and
/// works as a throwaway backend for local experiments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<BTreeMap<SampleId, Sample>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl SampleStore for MemoryStore {
    async fn find_by_id(&self, id: SampleId) -> Result<Option<Sample>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Sample>> {
        let rows = self.rows.read().await;
        let total = rows.len() as u64;

        let mut items: Vec<Sample> = rows.values().cloned().collect();
        items.sort_by(|a, b| {
            let ordering = match request.sort.field {
                SortField::Id => a.id.cmp(&b.id),
                // Tie-break equal names by id so the order is deterministic
                SortField::Name => a.name.cmp(&b.name).then(a.id.cmp(&b.id)),
            };
            match request.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let offset = request.offset() as usize;
        let items = if offset >= items.len() {
            Vec::new()
        } else {
            items
                .into_iter()
                .skip(offset)
                .take(request.size as usize)
                .collect()
        };

        Ok(Page::new(items, request, total))
    }

    async fn save(&self, sample: Sample) -> Result<Sample> {
        let mut rows = self.rows.write().await;
        rows.insert(sample.id, sample.clone());
        Ok(sample)
    }

    async fn delete(&self, sample: &Sample) -> Result<()> {
        let mut rows = self.rows.write().await;
        rows.remove(&sample.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortSpec;

    async fn store_with(samples: &[(SampleId, &str)]) -> MemoryStore {
        let store = MemoryStore::new();
        for (id, name) in samples {
            store.save(Sample::new(*id, *name)).await.unwrap();
        }
        store
    }

    fn page_request(page: u32, size: u32, field: SortField, direction: SortDirection) -> PageRequest {
        PageRequest::new(
            page,
            size,
            SortSpec { field, direction },
        )
    }

    #[tokio::test]
    async fn find_page_defaults_to_id_descending() {
        let store = store_with(&[(1, "Juan"), (2, "Ana"), (3, "Alex")]).await;

        let page = store.find_page(&PageRequest::default()).await.unwrap();

        assert_eq!(page.total, 3);
        let ids: Vec<SampleId> = page.items.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn find_page_sorts_by_name_ascending() {
        let store = store_with(&[(1, "Juan"), (2, "Ana"), (3, "Alex")]).await;

        let request = page_request(0, 10, SortField::Name, SortDirection::Asc);
        let page = store.find_page(&request).await.unwrap();

        let names: Vec<&str> = page.items.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alex", "Ana", "Juan"]);
    }

    #[tokio::test]
    async fn find_page_slices_and_keeps_total() {
        let store = store_with(&[(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")]).await;

        let request = page_request(1, 2, SortField::Id, SortDirection::Asc);
        let page = store.find_page(&request).await.unwrap();

        let ids: Vec<SampleId> = page.items.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 2);
    }

    #[tokio::test]
    async fn find_page_out_of_range_is_empty_not_an_error() {
        let store = store_with(&[(1, "Juan")]).await;

        let request = page_request(7, 10, SortField::Id, SortDirection::Desc);
        let page = store.find_page(&request).await.unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn save_overwrites_in_place() {
        let store = store_with(&[(1, "Juan")]).await;

        store.save(Sample::new(1, "Ana")).await.unwrap();

        assert_eq!(store.len().await, 1);
        let row = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(row.name, "Ana");
    }

    #[tokio::test]
    async fn delete_absent_row_is_silent() {
        let store = MemoryStore::new();

        store.delete(&Sample::new(42, "ghost")).await.unwrap();

        assert!(store.is_empty().await);
    }
}
