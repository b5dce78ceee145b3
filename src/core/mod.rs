pub mod error;
pub mod message;
pub mod transcript;

pub use error::{AppError, Result};
pub use message::{Message, Sender};
pub use transcript::Transcript;
