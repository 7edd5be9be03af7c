pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use claims::NumericClaim;
pub use claims::USER_ID_CLAIM;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use handler::BEARER_PREFIX;
