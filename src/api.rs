use gloo_timers::future::sleep;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::Person;

#[derive(Error, Debug)]
pub enum PeopleError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed people payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the whole people collection, in server order.
pub async fn get_people(config: &AppConfig) -> Result<Vec<Person>, PeopleError> {
    if !config.fetch_delay.is_zero() {
        sleep(config.fetch_delay).await;
    }

    let body = reqwest::get(&config.api_url)
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(serde_json::from_str(&body)?)
}
