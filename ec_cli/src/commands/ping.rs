use crate::client::CliClient;
use crate::error::Result;

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    let response = cli_client.ping().await?;
    println!("{response}");
    Ok(())
}
