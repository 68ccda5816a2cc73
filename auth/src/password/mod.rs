pub mod bcrypt;
pub mod errors;

pub use bcrypt::PasswordHasher;
pub use bcrypt::MAX_PASSWORD_BYTES;
pub use errors::PasswordError;
