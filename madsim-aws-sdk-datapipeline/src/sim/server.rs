use madsim::net::{Endpoint, Payload};
use madsim::rand::{thread_rng, Rng};
use std::{io, net::SocketAddr, sync::Arc, time::Duration};

use crate::error::*;
use crate::input::*;
use crate::output::*;
use crate::server::{DataPipelineService, Error};

/// A simulated Data Pipeline server.
#[derive(Default, Clone)]
pub struct SimServer {
    timeout_rate: f32,
    load: Option<String>,
}

impl SimServer {
    /// Create a new server builder that can configure a [`SimServer`].
    pub fn builder() -> Self {
        SimServer::default()
    }

    /// Set the rate of requests failing with `InternalServiceError` after a long delay.
    pub fn timeout_rate(mut self, rate: f32) -> Self {
        assert!((0.0..=1.0).contains(&rate));
        self.timeout_rate = rate;
        self
    }

    /// Start from a registry written by [`DataPipelineService::dump`].
    pub fn load(mut self, data: String) -> Self {
        self.load = Some(data);
        self
    }

    /// Consume this [`SimServer`] creating a future that will execute the server.
    pub async fn serve(self, addr: SocketAddr) -> io::Result<()> {
        let service = match &self.load {
            Some(data) => DataPipelineService::load(data)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            None => DataPipelineService::new(),
        };
        let service = Arc::new(SimService {
            timeout_rate: self.timeout_rate,
            inner: service,
        });
        let ep = Endpoint::bind(addr).await?;
        loop {
            let (tx, mut rx, _) = ep.accept1().await?;
            let service = service.clone();
            madsim::task::spawn(async move {
                let request = *rx.recv().await?.downcast::<Request>().map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidData, "unexpected request type")
                })?;
                let response: Payload = match request {
                    Request::CreatePipeline(input) => {
                        Box::new(service.create_pipeline(input).await)
                    }
                    Request::DeletePipeline(input) => {
                        Box::new(service.delete_pipeline(input).await)
                    }
                    Request::ValidatePipelineDefinition(input) => {
                        Box::new(service.validate_pipeline_definition(input).await)
                    }
                };
                tx.send(response).await?;
                Ok(()) as io::Result<()>
            });
        }
    }
}

/// A request to Data Pipeline server.
#[derive(Debug)]
pub(crate) enum Request {
    CreatePipeline(CreatePipelineInput),
    DeletePipeline(DeletePipelineInput),
    ValidatePipelineDefinition(ValidatePipelineDefinitionInput),
}

/// Adds timeouts to [`DataPipelineService`].
struct SimService {
    timeout_rate: f32,
    inner: DataPipelineService,
}

impl SimService {
    async fn create_pipeline(
        &self,
        input: CreatePipelineInput,
    ) -> Result<CreatePipelineOutput, CreatePipelineError> {
        self.timeout().await?;
        Ok(self.inner.create_pipeline(input)?)
    }

    async fn delete_pipeline(
        &self,
        input: DeletePipelineInput,
    ) -> Result<DeletePipelineOutput, DeletePipelineError> {
        self.timeout().await?;
        Ok(self.inner.delete_pipeline(input)?)
    }

    async fn validate_pipeline_definition(
        &self,
        input: ValidatePipelineDefinitionInput,
    ) -> Result<ValidatePipelineDefinitionOutput, ValidatePipelineDefinitionError> {
        self.timeout().await?;
        Ok(self.inner.validate_pipeline_definition(input)?)
    }

    async fn timeout(&self) -> Result<(), Error> {
        if thread_rng().gen_bool(self.timeout_rate as f64) {
            let t = thread_rng().gen_range(Duration::from_secs(5)..Duration::from_secs(15));
            madsim::time::sleep(t).await;
            tracing::warn!(?t, "datapipeline: request timed out");
            return Err(Error::InternalServiceError(
                "Internal service error: request timed out".to_string(),
            ));
        }
        Ok(())
    }
}
