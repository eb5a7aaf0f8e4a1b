//! Reference Vocabularies
//!
//! Loads categories and locations together; a half-loaded vocabulary is never applied.

use tracing::debug;

use crate::api::StockApi;
use crate::error::StockResult;
use crate::models::References;

/// Fetch both vocabularies concurrently. Fails if either request fails.
pub async fn load_references<A: StockApi + ?Sized>(api: &A) -> StockResult<References> {
    let (categories, locations) =
        futures::try_join!(api.list_categories(), api.list_locations())?;
    debug!(
        categories = categories.len(),
        locations = locations.len(),
        "reference vocabularies loaded"
    );
    Ok(References { categories, locations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::testing::MockApi;

    #[tokio::test]
    async fn test_load_references() {
        let api = MockApi::with_references(&["Dairy", "Produce"], &["Fridge", "Pantry"]);
        let refs = load_references(&api).await.expect("load failed");
        assert_eq!(refs.categories, vec!["Dairy", "Produce"]);
        assert_eq!(refs.locations, vec!["Fridge", "Pantry"]);
        assert_eq!(api.calls(), vec!["GET /categories", "GET /locations"]);
    }

    #[tokio::test]
    async fn test_one_failure_fails_all() {
        let api = MockApi::with_references(&["Dairy"], &["Fridge"]);
        api.fail_locations("locations unavailable");
        let err = load_references(&api).await.unwrap_err();
        assert_eq!(err, StockError::Remote("locations unavailable".to_string()));
    }
}
