//! Record store adapter.
//!
//! Persistence is an external collaborator behind [`PlotStore`]. Every
//! transport or status failure collapses into
//! [`MapError::StoreUnavailable`]; the session responds by keeping the
//! last good collection and showing a notice, never by crashing.

use crate::records::merge::merge;
use crate::records::model::{AvailablePlotInput, OccupiedPlotInput, PlotRecord};
use crate::{MapError, Result, StoreConfig};
use async_trait::async_trait;

/// List/create/delete operations on the plot record store
#[async_trait]
pub trait PlotStore: Send + Sync {
    /// All occupied plots; each record carries its deceased info
    async fn list_occupied(&self) -> Result<Vec<PlotRecord>>;

    /// All available plots
    async fn list_available(&self) -> Result<Vec<PlotRecord>>;

    async fn create_occupied(&self, input: &OccupiedPlotInput) -> Result<PlotRecord>;

    async fn create_available(&self, input: &AvailablePlotInput) -> Result<PlotRecord>;

    async fn delete_by_permit(&self, permit: &str) -> Result<()>;
}

/// Loads the full renderable collection.
///
/// The two fetches are issued concurrently and merged only once both
/// complete; a failure in either fails the combined load so the caller
/// keeps its previously displayed collection (stale but consistent).
pub async fn load_plots(store: &dyn PlotStore) -> Result<Vec<PlotRecord>> {
    let (occupied, available) =
        futures::try_join!(store.list_occupied(), store.list_available())?;

    log::debug!(
        "loaded {} occupied and {} available plots",
        occupied.len(),
        available.len()
    );

    Ok(merge(occupied, available))
}

/// HTTP implementation of [`PlotStore`]
pub struct HttpPlotStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl HttpPlotStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn fetch_list(&self, path: &str) -> Result<Vec<PlotRecord>> {
        let response = self
            .request(self.client.get(self.url(path)))
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?;

        response.json().await.map_err(unavailable)
    }
}

fn unavailable(err: reqwest::Error) -> MapError {
    MapError::StoreUnavailable(err.to_string())
}

#[async_trait]
impl PlotStore for HttpPlotStore {
    async fn list_occupied(&self) -> Result<Vec<PlotRecord>> {
        self.fetch_list("/api/plot").await
    }

    async fn list_available(&self) -> Result<Vec<PlotRecord>> {
        self.fetch_list("/api/available").await
    }

    async fn create_occupied(&self, input: &OccupiedPlotInput) -> Result<PlotRecord> {
        self.request(self.client.post(self.url("/api/plot")))
            .json(input)
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .json()
            .await
            .map_err(unavailable)
    }

    async fn create_available(&self, input: &AvailablePlotInput) -> Result<PlotRecord> {
        self.request(self.client.post(self.url("/api/available")))
            .json(input)
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .json()
            .await
            .map_err(unavailable)
    }

    async fn delete_by_permit(&self, permit: &str) -> Result<()> {
        self.request(
            self.client
                .delete(self.url(&format!("/api/plot/{permit}"))),
        )
        .send()
        .await
        .map_err(unavailable)?
        .error_for_status()
        .map_err(unavailable)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::model::Coordinate;

    struct StubStore {
        occupied: Result<Vec<PlotRecord>>,
        available: Result<Vec<PlotRecord>>,
    }

    fn record(permit: &str, status: &str) -> PlotRecord {
        PlotRecord {
            permit: permit.to_string(),
            lot: "1".to_string(),
            block: "A".to_string(),
            grave: "1".to_string(),
            status: Some(status.to_string()),
            lat: Some(Coordinate::Decimal(-26.194)),
            lng: Some(Coordinate::Decimal(28.027)),
            deceased: None,
        }
    }

    #[async_trait]
    impl PlotStore for StubStore {
        async fn list_occupied(&self) -> Result<Vec<PlotRecord>> {
            match &self.occupied {
                Ok(records) => Ok(records.clone()),
                Err(_) => Err(MapError::StoreUnavailable("occupied fetch".to_string())),
            }
        }

        async fn list_available(&self) -> Result<Vec<PlotRecord>> {
            match &self.available {
                Ok(records) => Ok(records.clone()),
                Err(_) => Err(MapError::StoreUnavailable("available fetch".to_string())),
            }
        }

        async fn create_occupied(&self, _input: &OccupiedPlotInput) -> Result<PlotRecord> {
            unimplemented!("not exercised")
        }

        async fn create_available(&self, _input: &AvailablePlotInput) -> Result<PlotRecord> {
            unimplemented!("not exercised")
        }

        async fn delete_by_permit(&self, _permit: &str) -> Result<()> {
            unimplemented!("not exercised")
        }
    }

    #[tokio::test]
    async fn test_load_plots_merges_both_sources() {
        let store = StubStore {
            occupied: Ok(vec![record("P1", "Occupied")]),
            available: Ok(vec![record("P2", "Available")]),
        };

        let combined = load_plots(&store).await.unwrap();

        let permits: Vec<&str> = combined.iter().map(|r| r.permit.as_str()).collect();
        assert_eq!(permits, ["P1", "P2"]);
    }

    #[tokio::test]
    async fn test_either_failure_fails_the_load() {
        let store = StubStore {
            occupied: Err(MapError::StoreUnavailable("down".to_string())),
            available: Ok(vec![record("P2", "Available")]),
        };

        let err = load_plots(&store).await.unwrap_err();
        assert!(matches!(err, MapError::StoreUnavailable(_)));
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let store = HttpPlotStore::new(StoreConfig::new("https://plots.example.org/"));
        assert_eq!(store.url("/api/plot"), "https://plots.example.org/api/plot");
    }
}
