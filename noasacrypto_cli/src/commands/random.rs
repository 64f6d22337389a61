use anyhow::Result;
use noasacrypto_api::Client;

use crate::output::{print_reason, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let reason = client.get_random_reason().await?;
    print_reason(&reason, format);
    Ok(())
}
