mod common;

use caih_sms::SendSms;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;
    let phone = common::required_env("CAIH_PHONE")?;
    let message = std::env::var("CAIH_MESSAGE")
        .unwrap_or_else(|_| "Hello from the caih-sms demo.".to_owned());
    let request_id = std::env::var("CAIH_REQUEST_ID").unwrap_or_else(|_| "demo-send-1".to_owned());

    let mut request = SendSms::new(phone, message, request_id);
    if let Ok(from) = std::env::var("CAIH_FROM") {
        request = request.sender(from);
    }

    let response = client.send(request).await?;
    println!("respCode: {}, fields: {:?}", response.resp_code, response.fields);

    Ok(())
}
