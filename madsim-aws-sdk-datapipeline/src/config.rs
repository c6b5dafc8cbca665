use aws_types::region::Region;
use aws_types::SdkConfig;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "datapipeline:443";

/// Client configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    endpoint_url: Option<String>,
    region: Option<Region>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn new(config: &SdkConfig) -> Self {
        Builder::from(config).build()
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// The `host:port` the simulated client connects to.
    ///
    /// A URL scheme and any path are dropped.
    pub fn endpoint_addr(&self) -> &str {
        let url = self.endpoint_url.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let url = url.split_once("://").map_or(url, |(_, rest)| rest);
        url.split('/').next().unwrap_or(url)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Builder {
    endpoint_url: Option<String>,
    region: Option<Region>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn set_endpoint_url(mut self, url: Option<String>) -> Self {
        self.endpoint_url = url;
        self
    }

    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.region = region.into();
        self
    }

    pub fn build(self) -> Config {
        Config {
            endpoint_url: self.endpoint_url,
            region: self.region,
        }
    }
}

impl From<&SdkConfig> for Builder {
    fn from(input: &SdkConfig) -> Self {
        Builder::default()
            .set_endpoint_url(input.endpoint_url().map(str::to_string))
            .region(input.region().cloned())
    }
}

impl From<&SdkConfig> for Config {
    fn from(sdk_config: &SdkConfig) -> Self {
        Builder::from(sdk_config).build()
    }
}
