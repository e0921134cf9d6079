mod core;
mod models;

pub use self::core::Chat;
pub use models::Transcript;
