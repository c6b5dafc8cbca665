use std::io;
use std::sync::Arc;

use aws_types::SdkConfig;
use madsim::net::Endpoint;
use madsim_aws_shape::SdkError;

use super::server::Request;
use crate::Config;

/// Client for Amazon DynamoDB.
#[derive(Debug, Clone)]
pub struct Client {
    handle: Arc<Handle>,
}

#[derive(Debug)]
struct Handle {
    conf: Config,
}

impl Client {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self::from_conf(sdk_config.into())
    }

    pub fn from_conf(conf: Config) -> Self {
        Client {
            handle: Arc::new(Handle { conf }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }

    /// Sends one request over a fresh connection and waits for its response.
    pub(crate) async fn send_request<T, E>(&self, req: Request) -> Result<T, SdkError<E>>
    where
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        let ep = Endpoint::connect(self.conf().endpoint_addr()).await?;
        let addr = ep.peer_addr()?;
        let (tx, mut rx) = ep.connect1(addr).await?;
        tx.send(Box::new(req)).await?;
        let rsp = rx.recv().await?;
        let rsp = *rsp.downcast::<Result<T, E>>().map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidData, "unexpected response type")
        })?;
        rsp.map_err(SdkError::service_error)
    }
}
