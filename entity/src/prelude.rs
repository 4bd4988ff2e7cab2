pub use super::booking::Entity as Booking;
pub use super::comment::Entity as Comment;
pub use super::item::Entity as Item;
pub use super::item_request::Entity as ItemRequest;
pub use super::user::Entity as User;
