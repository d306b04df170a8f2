use std::io;

use smscenter::{Mobile, SmsCenterClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SMSCENTER_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCENTER_API_KEY environment variable is required",
        )
    })?;
    let number = std::env::var("SMSCENTER_MOBILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCENTER_MOBILE environment variable is required (international format)",
        )
    })?;

    let mobile = Mobile::parse(None, number)?;
    let client = SmsCenterClient::new(api_key)?;

    let check = client.mobile().check(&mobile).await?;
    println!("mobile: {:?}", check.mobile);

    let hlr = client.hlr().lookup(&mobile).await?;
    println!(
        "network: {:?}, country: {:?}, ported: {:?}",
        hlr.network, hlr.country, hlr.ported
    );

    Ok(())
}
