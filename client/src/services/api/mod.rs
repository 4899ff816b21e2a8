//! # Expense API Client Module
//!
//! HTTP client for the expense tracker API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient, request building, response mapping
//! ├── auth.rs          - Login, registration, sign in/out
//! ├── categories.rs    - Category CRUD
//! ├── transactions.rs  - Transaction CRUD and the edit form
//! └── budget.rs        - Budget read/replace
//! ```

pub mod auth;
pub mod budget;
pub mod categories;
pub mod client;
pub mod transactions;

pub use client::ApiClient;
pub use transactions::TransactionForm;

#[cfg(test)]
mod tests;
