//! Amazon Lex runtime client
//!
//! Sends `PostText` requests signed with [`lexsign_aws_v4::RequestSigner`]:
//!
//! ```no_run
//! use lexsign_aws_v4::Credential;
//! use lexsign_core::Context;
//! use lexsign_lex::{Client, Config, PostTextInput};
//!
//! # async fn example(ctx: Context) -> lexsign_core::Result<()> {
//! let client = Client::new(
//!     ctx,
//!     Config::default(),
//!     Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY"),
//! )?;
//! let input = PostTextInput::new("in").with_session_attribute("attr_name", "value");
//! let output = client.post_text(&input).await?;
//! println!("{}", output.message);
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{
    AWS_REGION, LEX_BOT_ALIAS, LEX_BOT_NAME, LEX_ENDPOINT, LEX_REGION, LEX_SERVICE,
    LEX_TIMEOUT_SECS, LEX_USER_ID,
};

mod config;
pub use config::Config;

mod model;
pub use model::{PostTextInput, PostTextOutput};

mod client;
pub use client::Client;
