use consts::DUELS_API_URL;

use super::types::{Duel, DuelsError};

/// Data-access seam for duel history. Pages hand an implementation to
/// [`DuelList`](super::DuelList); tests can substitute their own.
pub trait DuelsProvider: Clone + Send + Sync + 'static {
    fn duels(
        &self,
        summoner: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Duel>, DuelsError>>;
}

pub fn validate_summoner(summoner: &str) -> Result<(), DuelsError> {
    if summoner.trim().is_empty() {
        return Err(DuelsError::EmptyName);
    }
    Ok(())
}

/// Fetches duel history from the go1v1 API.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct HttpDuelsProvider;

impl DuelsProvider for HttpDuelsProvider {
    async fn duels(&self, summoner: &str) -> Result<Vec<Duel>, DuelsError> {
        validate_summoner(summoner)?;

        let url = DUELS_API_URL
            .join(&format!("summoners/{summoner}/duels"))
            .map_err(|e| DuelsError::Network(e.to_string()))?;

        let resp = reqwest::Client::new()
            .get(url)
            .send()
            .await
            .map_err(|e| DuelsError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DuelsError::NotFound(summoner.to_string()));
        }
        if !resp.status().is_success() {
            return Err(DuelsError::Network(format!(
                "unexpected status {}",
                resp.status()
            )));
        }

        resp.json::<Vec<Duel>>()
            .await
            .map_err(|e| DuelsError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_summoner_names_are_refused() {
        assert!(matches!(
            validate_summoner(""),
            Err(DuelsError::EmptyName)
        ));
        assert!(matches!(
            validate_summoner("   "),
            Err(DuelsError::EmptyName)
        ));
        assert!(validate_summoner("ngryman").is_ok());
    }
}
