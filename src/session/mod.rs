//! Session token persistence.
//!
//! Two string values (access and refresh token) are kept in local storage and
//! cleared wholesale on logout. The API client reads the access token before
//! every request.

mod secure;
mod store;

pub use secure::SecureString;
pub use store::{FileTokenStore, MemoryTokenStore, SessionError, TokenStore};
