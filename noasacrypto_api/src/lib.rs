//! Client for the NoasaCrypto reasons API.
//!
//! ```no_run
//! use noasacrypto_api::{types::Category, Client};
//!
//! # async fn run() -> noasacrypto_api::Result<()> {
//! let client = Client::new()?;
//! let reason = client.get_random_reason().await?;
//! println!("{} {}", reason.emoji, reason.reason);
//!
//! let reason = client.get_reason_by_category(Category::DiamondHands).await?;
//! println!("{}", reason.reason);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod errors;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{Error, Result};
