use anyhow::Result;
use reviewly::widget::{ProductData, WidgetBuilder, WidgetProfile};
use reviewly::{Context, Credential, FailurePolicy};
use reviewly_http_send_reqwest::ReqwestHttpSend;

fn main() -> Result<()> {
    let merchant_id = std::env::var("REVIEWLY_MERCHANT_ID").unwrap_or_else(|_| "00000".into());
    let merchant_secret =
        std::env::var("REVIEWLY_MERCHANT_SECRET").unwrap_or_else(|_| "11111".into());

    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());

    let data = ProductData::new()
        .with_url("https://shop.example.com/product/cool-shoe-1")
        .with_brand("Cool Shoe Maker")
        .with_mpn("Cool Shoes")
        .with_gtin("00000000000")
        .with_title("Super Cool Shoes")
        .with_lang("en");

    let builder = WidgetBuilder::new(
        ctx,
        Credential::new(merchant_id, merchant_secret),
        WidgetProfile::Legacy,
    )
    .with_policy(FailurePolicy::Strict)
    .with_product_data(data)?;

    if let Some(url) = builder.iframe_url()? {
        println!("iframe URL:\n{url}");
    }

    if let Some(prop) = builder.data_property(false)? {
        println!("\ninline data property:\n{prop}");
    }

    Ok(())
}
