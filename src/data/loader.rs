//! Fetching of the earthquake and tectonic feeds
//!
//! [`DataLoader`] requests both feeds through a [`FeedClient`] and only hands
//! the results on once both have resolved. Nothing is retried and no timeout
//! is applied: a feed that never answers leaves the caller waiting forever.

use crate::{
    core::{
        builder::MapBuilder,
        config::{FeedConfig, FetchOrdering},
        map::QuakeMap,
    },
    data::geojson::{EarthquakeCollection, EarthquakeFeature, TectonicBoundaries},
    rendering::MapRenderer,
    Error, Result,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;

#[cfg(feature = "debug")]
use log::{debug, info};

/// Shared async HTTP client with a custom User-Agent so that public feed
/// hosts don't reject the request. Building the client once avoids the cost
/// of TLS and connection pool setup for every fetch.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Anything that can turn a URL into a parsed JSON document.
#[async_trait]
pub trait FeedClient: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value>;
}

/// reqwest-backed feed client
#[derive(Clone)]
pub struct HttpFeedClient {
    client: reqwest::Client,
}

impl HttpFeedClient {
    pub fn new() -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
        }
    }
}

impl Default for HttpFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        #[cfg(feature = "debug")]
        info!("Fetching feed {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Feed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;

        #[cfg(feature = "debug")]
        debug!("Downloaded {} bytes from {}", body.len(), url);

        Ok(serde_json::from_str(&body)?)
    }
}

/// Both feeds, fully resolved
#[derive(Debug, Clone, PartialEq)]
pub struct QuakeData {
    pub features: Vec<EarthquakeFeature>,
    pub tectonic: TectonicBoundaries,
}

/// Fetches the two feeds in the configured order
pub struct DataLoader<C = HttpFeedClient> {
    client: C,
    config: FeedConfig,
}

impl DataLoader<HttpFeedClient> {
    /// Loader for the public feeds over HTTP
    pub fn http(config: FeedConfig) -> Self {
        Self::new(HttpFeedClient::new(), config)
    }
}

impl<C: FeedClient> DataLoader<C> {
    pub fn new(client: C, config: FeedConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetch both feeds. With [`FetchOrdering::Sequential`] the tectonic
    /// request is issued only after the earthquake feed has resolved.
    pub async fn load(&self) -> Result<QuakeData> {
        let (features, tectonic) = match self.config.ordering {
            FetchOrdering::Sequential => {
                let features = self.fetch_earthquakes().await?;
                let tectonic = self.fetch_tectonic().await?;
                (features, tectonic)
            }
            FetchOrdering::Parallel => {
                futures::try_join!(self.fetch_earthquakes(), self.fetch_tectonic())?
            }
        };

        #[cfg(feature = "debug")]
        info!(
            "Loaded {} earthquake features and {} plate boundary segments",
            features.len(),
            tectonic.feature_count().unwrap_or(0)
        );

        Ok(QuakeData { features, tectonic })
    }

    /// Load both feeds, then hand them to `build`.
    pub async fn load_then<F, T>(&self, build: F) -> Result<T>
    where
        F: FnOnce(Vec<EarthquakeFeature>, TectonicBoundaries) -> T,
    {
        let QuakeData { features, tectonic } = self.load().await?;
        Ok(build(features, tectonic))
    }

    /// Load, build and mount in one go. The renderer is not touched unless
    /// both feeds resolved.
    pub async fn run<R>(&self, builder: &MapBuilder, renderer: &mut R) -> Result<QuakeMap>
    where
        R: MapRenderer + ?Sized,
    {
        let map = self
            .load_then(|features, tectonic| builder.build(&features, tectonic))
            .await?;
        map.mount(renderer)?;
        Ok(map)
    }

    async fn fetch_earthquakes(&self) -> Result<Vec<EarthquakeFeature>> {
        let value = self.client.fetch_json(&self.config.earthquake_url).await?;
        Ok(EarthquakeCollection::from_value(value)?.features)
    }

    async fn fetch_tectonic(&self) -> Result<TectonicBoundaries> {
        let value = self.client.fetch_json(&self.config.tectonic_url).await?;
        Ok(TectonicBoundaries::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::headless::HeadlessRenderer;
    use serde_json::json;
    use std::sync::Mutex;

    const QUAKES: &str = "mem://quakes";
    const PLATES: &str = "mem://plates";

    /// In-memory client that records the order of request starts and ends
    struct MemoryClient {
        events: Mutex<Vec<String>>,
    }

    impl MemoryClient {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FeedClient for MemoryClient {
        async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
            self.events.lock().unwrap().push(format!("start {}", url));
            tokio::task::yield_now().await;
            let body = match url {
                QUAKES => json!({
                    "type": "FeatureCollection",
                    "features": [
                        { "type": "Feature", "properties": { "mag": 2.0, "title": "A" },
                          "geometry": { "type": "Point", "coordinates": [-110.0, 37.0, 5.0] } },
                        { "type": "Feature", "properties": { "mag": 1.0, "title": "B" }, "geometry": null }
                    ]
                }),
                PLATES => json!({ "type": "FeatureCollection", "features": [] }),
                other => {
                    return Err(Error::Feed {
                        url: other.to_string(),
                        status: 404,
                    })
                }
            };
            self.events.lock().unwrap().push(format!("end {}", url));
            Ok(body)
        }
    }

    fn memory_config() -> FeedConfig {
        FeedConfig {
            earthquake_url: QUAKES.to_string(),
            tectonic_url: PLATES.to_string(),
            ordering: FetchOrdering::Sequential,
        }
    }

    #[tokio::test]
    async fn test_sequential_ordering() {
        let loader = DataLoader::new(MemoryClient::new(), memory_config());
        let data = loader.load().await.unwrap();

        assert_eq!(data.features.len(), 2);
        assert_eq!(data.tectonic.feature_count(), Some(0));
        assert_eq!(
            loader.client.events(),
            vec![
                "start mem://quakes",
                "end mem://quakes",
                "start mem://plates",
                "end mem://plates"
            ]
        );
    }

    #[tokio::test]
    async fn test_parallel_ordering_starts_both() {
        let mut config = memory_config();
        config.ordering = FetchOrdering::Parallel;
        let loader = DataLoader::new(MemoryClient::new(), config);
        let data = loader.load().await.unwrap();

        assert_eq!(data.features.len(), 2);
        let events = loader.client.events();
        assert_eq!(events[0], "start mem://quakes");
        assert_eq!(events[1], "start mem://plates");
    }

    #[tokio::test]
    async fn test_failed_feed_skips_second_request() {
        let mut config = memory_config();
        config.earthquake_url = "mem://missing".to_string();
        let loader = DataLoader::new(MemoryClient::new(), config);

        let result = loader.load().await;
        assert!(matches!(result, Err(Error::Feed { status: 404, .. })));
        assert_eq!(loader.client.events(), vec!["start mem://missing"]);
    }

    #[tokio::test]
    async fn test_run_mounts_once_loaded() {
        let loader = DataLoader::new(MemoryClient::new(), memory_config());
        let mut renderer = HeadlessRenderer::new();
        let map = loader.run(&MapBuilder::new(), &mut renderer).await.unwrap();

        assert_eq!(map.overlays.circles.len(), 1);
        assert!(renderer.is_mounted());
    }

    #[tokio::test]
    async fn test_failed_run_leaves_renderer_untouched() {
        let mut config = memory_config();
        config.tectonic_url = "mem://missing".to_string();
        let loader = DataLoader::new(MemoryClient::new(), config);
        let mut renderer = HeadlessRenderer::new();

        assert!(loader.run(&MapBuilder::new(), &mut renderer).await.is_err());
        assert!(renderer.calls().is_empty());
    }
}
