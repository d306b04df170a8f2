use std::io;

use smscenter::{AuthId, MessageText, Mobile, SmsCenterClient, TwoFactorOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SMSCENTER_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCENTER_API_KEY environment variable is required",
        )
    })?;
    let mobile = std::env::var("SMSCENTER_MOBILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCENTER_MOBILE environment variable is required",
        )
    })?;

    let client = SmsCenterClient::new(api_key)?;
    let options = TwoFactorOptions {
        text: Some(MessageText::new("Your verification code is %%code%%")?),
        ..Default::default()
    };
    let sent = client
        .two_factor()
        .send(&Mobile::new(mobile)?, &options)
        .await?;
    println!("auth id: {:?}, status: {:?}", sent.auth_id, sent.auth_status);

    let Some(auth_id) = sent.auth_id else {
        return Ok(());
    };
    println!("enter the code:");
    let mut code = String::new();
    io::stdin().read_line(&mut code)?;

    let checked = client
        .two_factor()
        .check(&AuthId::new(auth_id)?, &code)
        .await?;
    println!("auth: {:?}", checked.auth);

    Ok(())
}
