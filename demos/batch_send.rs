mod common;

use caih_sms::BatchSend;

/// `CAIH_PHONES` is a comma-separated list; every number gets `CAIH_MESSAGE`.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;
    let phones: Vec<String> = common::required_env("CAIH_PHONES")?
        .split(',')
        .map(|phone| phone.trim().to_owned())
        .filter(|phone| !phone.is_empty())
        .collect();
    let message = std::env::var("CAIH_MESSAGE")
        .unwrap_or_else(|_| "Hello from the caih-sms batch demo.".to_owned());
    let messages = vec![message; phones.len()];

    let response = client
        .batch_send(BatchSend::new("demo-batch-1", phones, messages))
        .await?;
    println!("respCode: {}, fields: {:?}", response.resp_code, response.fields);

    Ok(())
}
