use serde::Serialize;
use serde_json::Value;

use crate::client::HelpdeskClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct ArticleSearch<'a> {
    query: &'a str,
}

impl HelpdeskClient {
    // --- Categories ---

    pub async fn get_all_categories(&self) -> Result<Value, ApiError> {
        self.get("knowledge-base/categories").await
    }

    pub async fn get_category_by_id(&self, id: i64) -> Result<Value, ApiError> {
        self.get(&format!("knowledge-base/categories/{id}")).await
    }

    pub async fn create_category<B: Serialize + ?Sized>(
        &self,
        category: &B,
    ) -> Result<Value, ApiError> {
        self.post("knowledge-base/categories", category).await
    }

    pub async fn update_category<B: Serialize + ?Sized>(
        &self,
        id: i64,
        category: &B,
    ) -> Result<Value, ApiError> {
        self.put(&format!("knowledge-base/categories/{id}"), category)
            .await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("knowledge-base/categories/{id}")).await
    }

    // --- Articles ---

    pub async fn get_all_articles(&self) -> Result<Value, ApiError> {
        self.get("knowledge-base/articles").await
    }

    pub async fn get_active_articles(&self) -> Result<Value, ApiError> {
        self.get("knowledge-base/articles/active").await
    }

    pub async fn get_articles_by_category(&self, category_id: i64) -> Result<Value, ApiError> {
        self.get(&format!("knowledge-base/articles/category/{category_id}"))
            .await
    }

    pub async fn get_article_by_id(&self, id: i64) -> Result<Value, ApiError> {
        self.get(&format!("knowledge-base/articles/{id}")).await
    }

    pub async fn create_article<B: Serialize + ?Sized>(&self, article: &B) -> Result<Value, ApiError> {
        self.post("knowledge-base/articles", article).await
    }

    pub async fn update_article<B: Serialize + ?Sized>(
        &self,
        id: i64,
        article: &B,
    ) -> Result<Value, ApiError> {
        self.put(&format!("knowledge-base/articles/{id}"), article)
            .await
    }

    pub async fn delete_article(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("knowledge-base/articles/{id}")).await
    }

    /// Semantic search over article content.
    pub async fn search_articles(&self, query: &str) -> Result<Value, ApiError> {
        self.post("knowledge-base/search", &ArticleSearch { query })
            .await
    }
}
