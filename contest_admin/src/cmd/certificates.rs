use anyhow::{Context, Result};
use clap::Args;
use contest_admin_libs::client::{CertificateClient, CertificateQuery, HttpTransport};
use std::env;

#[derive(Debug, Args)]
pub struct CertificatesArgs {
    #[arg(long)]
    contest_id_search: Option<String>,
    #[arg(long)]
    id_search: Option<String>,
    #[arg(long, default_value_t = 1)]
    page_number: u32,
    #[arg(long, default_value_t = 10)]
    page_size: u32,
    /// Overrides the API_BASE_URL environment variable.
    #[arg(long)]
    base_url: Option<String>,
}

impl CertificatesArgs {
    fn query(&self) -> CertificateQuery {
        CertificateQuery {
            contest_id_search: self.contest_id_search.clone(),
            id_search: self.id_search.clone(),
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}

pub async fn run(args: CertificatesArgs) -> Result<()> {
    let base_url = match &args.base_url {
        Some(base_url) => base_url.clone(),
        None => env::var("API_BASE_URL").unwrap_or_else(|_| {
            tracing::warn!("API_BASE_URL environment variable is not set. Default value `http://localhost:8080/api` will be used.");
            String::from("http://localhost:8080/api")
        }),
    };
    let token = env::var("API_TOKEN").ok();

    let transport = HttpTransport::new(&base_url, token.as_deref()).with_context(|| {
        let message = format!("couldn't create API client for {}", base_url);
        tracing::error!(message);
        message
    })?;
    let client = CertificateClient::new(transport);

    let query = args.query();
    tracing::info!("Fetch certificate templates {:?}", query);
    let body = client.get_all(Some(&query)).await.with_context(|| {
        let message = "failed to fetch certificate templates";
        tracing::error!(message);
        message
    })?;

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
