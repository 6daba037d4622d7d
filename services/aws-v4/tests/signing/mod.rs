mod compat;
mod standard;

use chrono::{TimeZone, Utc};
use lexsign_aws_v4::{Credential, RequestSigner, SigningContext};
use lexsign_core::time::DateTime;

pub const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
pub const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";
pub const LEX_HOST: &str = "runtime.lex.eu-west-1.amazonaws.com";
pub const LEX_PATH: &str = "/bot/fichin/alias/fichin/user/myuserid/text";

/// Initialize test logging and return the signing instant used everywhere.
pub fn init_signing_test() -> DateTime {
    let _ = env_logger::builder().is_test(true).try_init();

    Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
}

pub fn test_credential() -> Credential {
    Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY)
}

pub fn lex_signer() -> RequestSigner {
    RequestSigner::new(SigningContext::new("lex", "eu-west-1"))
}
