use std::io;

use smscenter::SmsCenterClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("SMSCENTER_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCENTER_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("SMSCENTER_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCENTER_PASSWORD environment variable is required",
        )
    })?;

    let client = SmsCenterClient::from_credentials(username, password).await?;
    let balance = client.balance().check().await?;
    println!("balance: {:?}", balance.balance);

    Ok(())
}
