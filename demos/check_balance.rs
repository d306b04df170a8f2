use std::io;

use smscenter::SmsCenterClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SMSCENTER_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCENTER_API_KEY environment variable is required",
        )
    })?;

    let client = SmsCenterClient::builder(api_key)
        .max_retries(2)
        .build()?;
    let balance = client.balance().check().await?;
    let purchases = client.purchases().list().await?;

    println!("balance: {:?}", balance.balance);
    for purchase in purchases.purchases {
        println!(
            "purchase {:?}: {:?} sms for {:?}",
            purchase.purchase_id, purchase.sms, purchase.cost
        );
    }

    Ok(())
}
