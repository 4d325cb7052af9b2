pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use claims::TokenPayload;
pub use codec::TokenCodec;
pub use codec::TOKEN_VALIDITY_SECONDS;
pub use errors::TokenError;
