use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Origin the hosted payment page redirects back to after checkout.
    pub public_base_url: String,
    pub stripe_secret_key: String,
    pub stripe_api_base: String,
    pub cart_storage_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));
        let stripe_secret_key = env::var("STRIPE_SECRET_KEY")?;
        let stripe_api_base =
            env::var("STRIPE_API_BASE").unwrap_or_else(|_| "https://api.stripe.com".to_string());
        let cart_storage_path = env::var("CART_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cart-storage.json"));
        Ok(Self {
            host,
            port,
            public_base_url,
            stripe_secret_key,
            stripe_api_base,
            cart_storage_path,
        })
    }
}
