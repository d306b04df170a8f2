use std::io;

use smscenter::{MessageText, Mobile, SendOptions, SendSms, SenderId, SmsCenterClient};

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
    let sender = std::env::var("SMSCENTER_FROM").unwrap_or_else(|_| "SMSCenter".to_owned());
    let message = std::env::var("SMSCENTER_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smscenter demo.".to_owned());

    let client = SmsCenterClient::new(api_key)?;
    let request = SendSms::new(
        Mobile::new(mobile)?,
        MessageText::new(message)?,
        SenderId::new(sender)?,
        SendOptions::default(),
    );

    let response = client.sms().send(&request).await?;
    println!(
        "id: {:?}, cost: {:?}, balance: {:?}",
        response.id, response.cost, response.balance
    );

    client.close();
    Ok(())
}
