//! # Category Endpoints

use reqwest::Method;
use shared::{Category, CategoryRequest};

use super::client::ApiClient;
use crate::core::error::Result;

impl ApiClient {
    /// Fetch all categories of the logged-in user.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let request = self.authorized(Method::GET, "/categories")?;
        self.send_json("list_categories", request).await
    }

    /// Fetch a single category.
    pub async fn get_category(&self, category_id: i64) -> Result<Category> {
        let request = self.authorized(Method::GET, &category_path(category_id))?;
        self.send_json("get_category", request).await
    }

    /// Create a category and return it as stored by the server.
    pub async fn create_category(&self, title: &str, description: &str) -> Result<Category> {
        let body = CategoryRequest {
            title: title.to_string(),
            description: description.to_string(),
        };
        let request = self.authorized_json(Method::POST, "/categories", &body)?;
        self.send_json("create_category", request).await
    }

    /// Replace a category's title and description.
    pub async fn update_category(&self, category_id: i64, title: &str, description: &str) -> Result<()> {
        let body = CategoryRequest {
            title: title.to_string(),
            description: description.to_string(),
        };
        let request = self.authorized_json(Method::PUT, &category_path(category_id), &body)?;
        self.send_empty("update_category", request).await
    }

    /// Delete a category together with all of its transactions.
    pub async fn delete_category(&self, category_id: i64) -> Result<()> {
        let request = self.authorized(Method::DELETE, &category_path(category_id))?;
        self.send_empty("delete_category", request).await
    }
}

pub(crate) fn category_path(category_id: i64) -> String {
    format!("/categories/{}", category_id)
}
