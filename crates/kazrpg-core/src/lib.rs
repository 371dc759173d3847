pub mod booking;
pub mod collection;
pub mod error;
pub mod game;
pub mod id;
pub mod message;
pub mod review;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use collection::CollectionName;
pub use error::CoreError;
pub use game::Game;
pub use id::RecordId;
pub use message::Message;
pub use review::Review;
pub use user::{User, UserRole};
