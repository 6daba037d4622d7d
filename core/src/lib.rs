//! Core components for lexsign.
//!
//! This crate provides the foundational types and traits shared by the signer,
//! the transport and the Lex client.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Error**: One error type with an [`ErrorKind`] per failure class
//!
//! ## Example
//!
//! ```no_run
//! use lexsign_core::{Context, ProvideCredential, SigningCredential, StaticEnv};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(
//!         &self,
//!         ctx: &Context,
//!     ) -> lexsign_core::Result<Option<Self::Credential>> {
//!         Ok(ctx.env_var("MY_KEY").zip(ctx.env_var("MY_SECRET")).map(
//!             |(key, secret)| MyCredential { key, secret },
//!         ))
//!     }
//! }
//!
//! # async fn example() -> lexsign_core::Result<()> {
//! let ctx = Context::new().with_env(StaticEnv::default());
//! let cred = MyProvider.provide_credential(&ctx).await?;
//! assert!(cred.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};
