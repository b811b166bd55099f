use anyhow::Result;
use reviewly::api::ApiClient;
use reviewly::{Context, Credential, FailurePolicy};
use reviewly_http_send_reqwest::ReqwestHttpSend;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let merchant_id = std::env::var("REVIEWLY_MERCHANT_ID")?;
    let merchant_secret = std::env::var("REVIEWLY_MERCHANT_SECRET")?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    let client = ApiClient::new(ctx, Credential::new(merchant_id, merchant_secret))
        .with_policy(FailurePolicy::Strict);

    let payload = json!({
        "email": "customer@example.com",
        "order": "1234",
        "products": [{
            "url": "https://shop.example.com/product/cool-shoe-1",
            "gtin": "00000000000",
        }],
    });

    match client.customer_contact_request(&payload).await? {
        Some(resource) => println!("contact request accepted: {resource}"),
        None => println!("contact request produced no result"),
    }

    Ok(())
}
