use anyhow::Result;
use clap::Args;
use noasacrypto_api::types::Category;
use noasacrypto_api::Client;

use crate::output::{print_reason, OutputFormat};

#[derive(Args)]
pub struct CategoryArgs {
    /// Category id, e.g. rug-check. Ids outside the built-in list are sent as-is.
    pub id: String,
}

pub async fn run(args: &CategoryArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if args.id.parse::<Category>().is_err() {
        tracing::info!("{} is not a built-in category, asking the server anyway", args.id);
    }
    let reason = client.get_reason_by_category(&args.id).await?;
    print_reason(&reason, format);
    Ok(())
}
