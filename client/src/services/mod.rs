//! # Services Module
//!
//! External service integrations for the expense client.
//!
//! ```text
//! services/
//! └── api/     - Expense tracker HTTP API client
//!                (session, categories, transactions, budget)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │              expense CLI                 │
//! │                                          │
//! │  ┌──────────────────┐   ┌─────────────┐  │
//! │  │  ApiClient       │──▶│  Session    │  │
//! │  │  (api/)          │   │  (token)    │  │
//! │  └────────┬─────────┘   └─────────────┘  │
//! └───────────┼──────────────────────────────┘
//!             │ HTTP/JSON + Bearer token
//!             ▼
//! ┌──────────────────────────┐
//! │  Expense Tracker API     │
//! │  /api/users/*            │
//! │  /api/categories/*       │
//! │  /api/budget             │
//! └──────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! All calls return [`crate::core::Result`]:
//! - Missing token: `ClientError::MissingSession`, before any request is sent
//! - Network errors: `ClientError::Transport`
//! - Non-2xx answers: `ClientError::Api` carrying the server's message
//!
//! Nothing is retried and the token is never refreshed or dropped automatically.

pub mod api;
