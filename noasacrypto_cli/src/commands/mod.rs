//! CLI subcommand implementations.

pub mod categories;
pub mod category;
pub mod random;

use noasacrypto_api::Error;

/// What the user should do next for each kind of failure.
pub fn hint(err: &Error) -> &'static str {
    match err {
        Error::CategoryNotFound(_) => {
            "hint: run `noasacrypto categories` to see the built-in category ids"
        }
        Error::Connection { .. } => "hint: check your network connection and --base-url",
        Error::Api { .. } => "hint: the API rejected the request; see the message above",
        Error::InvalidConfig(_) => "hint: check --base-url and --timeout-ms",
    }
}
