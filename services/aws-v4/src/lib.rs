//! AWS SigV4 request signer
//!
//! [`RequestSigner`] turns a [`RequestDescriptor`] and a [`Credential`] into
//! the headers that authenticate the request:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use lexsign_aws_v4::{Credential, RequestDescriptor, RequestSigner, SigningContext};
//!
//! # fn main() -> lexsign_core::Result<()> {
//! let signer = RequestSigner::new(SigningContext::new("lex", "eu-west-1"));
//! let cred = Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
//! let req = RequestDescriptor::post("/bot/fichin/alias/fichin/user/myuserid/text")
//!     .with_body(r#"{"inputText": "in"}"#);
//!
//! let signed = signer.sign(&cred, &req, Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())?;
//! assert_eq!(signed.signed_headers(), "content-type;host;x-amz-date");
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN};

mod credential;
pub use credential::Credential;

mod signing_context;
pub use signing_context::SigningContext;

mod request;
pub use request::{RequestDescriptor, SignedRequest, TimestampPair};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
