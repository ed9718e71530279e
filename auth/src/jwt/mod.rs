pub mod claims;
pub mod errors;
pub mod extract;
pub mod handler;

pub use claims::Claims;
pub use errors::JwtError;
pub use extract::extract_token;
pub use handler::JwtHandler;
