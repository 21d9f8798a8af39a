mod common;

use caih_sms::QueryStatus;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;
    let message_id = common::required_env("CAIH_MESSAGE_ID")?;
    let phone = common::required_env("CAIH_PHONE")?;

    let response = client
        .query_status(QueryStatus::new(message_id, phone))
        .await?;
    println!("respCode: {}, fields: {:?}", response.resp_code, response.fields);

    Ok(())
}
