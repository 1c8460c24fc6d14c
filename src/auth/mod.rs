//! Authentication module for the Salt Edge API.
//!
//! Salt Edge identifies the calling application by the `App-id` and `Secret`
//! headers sent with every request.

mod credentials;

pub use credentials::{
    APP_ID_ENV, APP_ID_HEADER, Credentials, CredentialsProvider, SECRET_ENV, SECRET_HEADER,
};
