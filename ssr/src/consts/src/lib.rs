use once_cell::sync::Lazy;
use reqwest::Url;

pub const APP_TITLE: &str = "go1v1";

/// Base URL of the duel-history API. Overridable at build time so staging
/// deployments can point elsewhere without a code change.
pub static DUELS_API_URL: Lazy<Url> = Lazy::new(|| {
    let base = option_env!("GO1V1_API_URL").unwrap_or("https://api.go1v1.gg/");
    Url::parse(base).expect("invalid duels API base url")
});
