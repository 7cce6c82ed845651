pub mod error;
pub mod health;
pub mod owner;
pub mod wishes;

pub use error::AppError;
pub use owner::CurrentOwner;
