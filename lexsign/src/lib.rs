//! Talking to Amazon Lex with SigV4 signed requests.
//!
//! This crate bundles the signer, the Lex runtime client and a default
//! [`Context`] backed by the process environment and `reqwest`:
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> lexsign::Result<()> {
//! use lexsign::lex::PostTextInput;
//!
//! let client = lexsign::lex::default_client().await?;
//! let output = client.post_text(&PostTextInput::new("in")).await?;
//! println!("{}", output.message);
//! # Ok(())
//! # }
//! ```

pub use lexsign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

/// AWS SigV4 signing.
pub mod aws {
    pub use lexsign_aws_v4::*;
}

pub mod lex;
