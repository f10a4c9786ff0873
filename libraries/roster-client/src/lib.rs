//! Roster Directory Client
//!
//! HTTP client library for a JSONPlaceholder-style user collection
//! service.
//!
//! # Features
//!
//! - **Listing**: fetch the full user collection in one request
//! - **Creation**: submit a new user and receive the server-assigned record
//!
//! All paging and filtering happen client-side; the service is consumed
//! unauthenticated with exactly these two endpoints.
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, DirectoryClient, NewUser};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://jsonplaceholder.typicode.com");
//!     let client = DirectoryClient::new(config)?;
//!
//!     let users = client.list_users().await?;
//!     println!("Found {} users", users.len());
//!
//!     let created = client
//!         .create_user(&NewUser::new("Ana", "ana@x.com"))
//!         .await?;
//!     println!("Created user {}", created.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::DirectoryClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, NewUser};
