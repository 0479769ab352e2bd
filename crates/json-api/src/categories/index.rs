//! Category Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::categories::records::CategoryRecord;

use crate::extensions::*;

/// Category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryResponse {
    pub id: Uuid,

    pub name: String,

    pub created_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        Self {
            id: category.uuid.into_uuid(),
            name: category.name,
            created_at: category.created_at.to_string(),
        }
    }
}

/// Category Index Handler
///
/// Returns every category, ordered by name.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let app = depot.app_or_500()?;

    let categories = app
        .categories
        .list_categories()
        .await
        .or_500("failed to fetch categories")?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::categories::{
        CategoriesServiceError, MockCategoriesService, records::CategoryUuid,
    };

    use crate::test_helpers::{categories_service, storage_error};

    use super::*;

    fn make_service(repo: MockCategoriesService) -> Service {
        categories_service(repo, Router::with_path("categories").get(handler))
    }

    fn make_category(name: &str) -> CategoryRecord {
        CategoryRecord {
            uuid: CategoryUuid::new(),
            name: name.to_string(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn test_index_returns_categories() -> TestResult {
        let mut repo = MockCategoriesService::new();

        repo.expect_list_categories()
            .once()
            .return_once(|| Ok(vec![make_category("Electronics"), make_category("Sports")]));
        repo.expect_ensure_category().never();

        let mut res = TestClient::get("http://example.com/categories")
            .send(&make_service(repo))
            .await;

        let body: Vec<CategoryResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert_eq!(
            body.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            ["Electronics", "Sports"],
            "names"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut repo = MockCategoriesService::new();

        repo.expect_list_categories()
            .once()
            .return_once(|| Err(CategoriesServiceError::Sql(storage_error())));
        repo.expect_ensure_category().never();

        let res = TestClient::get("http://example.com/categories")
            .send(&make_service(repo))
            .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::INTERNAL_SERVER_ERROR),
            "status"
        );

        Ok(())
    }
}
