use std::env;

use anyhow::Result;
use http::{header, HeaderMap, HeaderValue, Method};
use log::{error, info};
use partnersign_core::{Body, Context, OsEnv};
use partnersign_file_read_tokio::TokioFileRead;
use partnersign_sagemaker::{Config, PartnerAppAuthProvider};

const DEFAULT_URL: &str =
    "https://app-ABCDEFGHIJKL.partner-app.us-west-2.sagemaker.aws/clientlib/isAlive/ver";

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();
    env_logger::init();

    let url = env::var("PARTNER_APP_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
    let provider = PartnerAppAuthProvider::new(ctx.clone(), Config::default().from_env(&ctx))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    let signed = provider
        .get_signed_request(&url, Method::GET, &headers, Body::Empty)
        .await?;

    let resp = reqwest::Client::new()
        .get(&signed.url)
        .headers(signed.headers)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;
    if status.is_success() {
        info!("response: {body}");
        println!("Response: {body}");
    } else {
        error!("partner app returned {status}");
        eprintln!("Status: {status}");
        eprintln!("Data: {body}");
    }

    Ok(())
}
