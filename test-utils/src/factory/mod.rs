//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, so
//! parents must be created first (see `helpers` for shortcuts that do it for you).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let owner = factory::create_user(&db).await?;
//!     let item = factory::create_item(&db, owner.id).await?;
//!
//!     // Or with all dependencies at once
//!     let (owner, booker, item, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let booking = factory::booking::BookingFactory::new(&db, item.id, booker.id)
//!     .status("APPROVED")
//!     .past()
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod item;
pub mod item_request;
pub mod user;

pub use booking::create_booking;
pub use comment::create_comment;
pub use item::create_item;
pub use item_request::create_item_request;
pub use user::create_user;
