mod common;

use caih_sms::BatchQueryStatus;

/// `CAIH_PHONES` and `CAIH_MESSAGE_IDS` are comma-separated and paired by position.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;
    let phones = split_list(&common::required_env("CAIH_PHONES")?);
    let message_ids = split_list(&common::required_env("CAIH_MESSAGE_IDS")?);
    let request_id =
        std::env::var("CAIH_REQUEST_ID").unwrap_or_else(|_| "demo-batch-1".to_owned());

    let response = client
        .batch_query_status(BatchQueryStatus::new(request_id, phones, message_ids))
        .await?;
    println!("respCode: {}, fields: {:?}", response.resp_code, response.fields);

    Ok(())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}
