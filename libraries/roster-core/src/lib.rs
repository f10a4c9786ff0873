//! Roster Core
//!
//! Domain types and the directory state machine shared by the Roster
//! applications.
//!
//! The crate defines:
//! - **Domain Types**: [`User`]
//! - **Directory State**: [`Directory`], an owned state container mutated
//!   only through its four operations (`load`, `search`, `paginate`,
//!   `add_user`). The filtered view, the visible page, and the page count
//!   are derived on every read rather than stored.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{Directory, User};
//!
//! let mut directory = Directory::new();
//! directory.load(vec![
//!     User::new(1, "Leanne Graham", "leanne@example.com"),
//!     User::new(2, "Ervin Howell", "ervin@example.com"),
//! ]);
//!
//! directory.search("ervin");
//! assert_eq!(directory.filtered_users().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod directory;
pub mod types;

// Re-export commonly used types
pub use directory::{Directory, PAGE_SIZE};
pub use types::User;
