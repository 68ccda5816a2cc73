pub mod claims;
pub mod errors;
pub mod service;

pub use claims::Claims;
pub use errors::TokenError;
pub use service::SessionToken;
pub use service::TokenService;
pub use service::TOKEN_TYPE;
