//! Users Domain
//!
//! User management on top of a concurrent in-memory store.
//!
//! # Layers
//!
//! ```text
//!  HTTP (handlers) ──► UserService ──► R: UserRepository (port)
//!                                          │
//!                                          └── InMemoryUserRepository
//!                                              BTreeMap<seq, User> + counter
//!                                              behind one tokio RwLock
//! ```
//!
//! The service owns the business rules (blank input, email conflicts on
//! update); the store owns ID assignment and is the final authority on email
//! uniqueness at creation time.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let store = InMemoryUserRepository::new();
//! let router = handlers::router(UserService::new(store.clone()));
//! // `store` can be handed to other domains that resolve users.
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, ListUsersQuery, UpdateUser, User, UserResponse};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
