use madsim::net::{Endpoint, Payload};
use madsim::rand::{thread_rng, Rng};
use std::{io, net::SocketAddr, sync::Arc, time::Duration};

use crate::error::*;
use crate::input::*;
use crate::output::*;
use crate::server::{DynamoDbService, Error};

/// Simulated time between resets of the throughput decrease limit.
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// A simulated DynamoDB server.
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

    /// Set the rate of requests failing with `InternalServerError` after a long delay.
    pub fn timeout_rate(mut self, rate: f32) -> Self {
        assert!((0.0..=1.0).contains(&rate));
        self.timeout_rate = rate;
        self
    }

    /// Start from a catalog written by [`DynamoDbService::dump`].
    pub fn load(mut self, data: String) -> Self {
        self.load = Some(data);
        self
    }

    /// Consume this [`SimServer`] creating a future that will execute the server.
    pub async fn serve(self, addr: SocketAddr) -> io::Result<()> {
        let service = match &self.load {
            Some(data) => DynamoDbService::load(data)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            None => DynamoDbService::new(),
        };
        let service = Arc::new(SimService::new(self.timeout_rate, service));
        let ep = Endpoint::bind(addr).await?;
        loop {
            let (tx, mut rx, _) = ep.accept1().await?;
            let service = service.clone();
            madsim::task::spawn(async move {
                let request = *rx.recv().await?.downcast::<Request>().map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidData, "unexpected request type")
                })?;
                let response: Payload = match request {
                    Request::CreateTable(input) => Box::new(service.create_table(input).await),
                    Request::DescribeTable(input) => {
                        Box::new(service.describe_table(input).await)
                    }
                    Request::UpdateTable(input) => Box::new(service.update_table(input).await),
                };
                tx.send(response).await?;
                Ok(()) as io::Result<()>
            });
        }
    }
}

/// A request to DynamoDB server.
#[derive(Debug)]
pub(crate) enum Request {
    CreateTable(CreateTableInput),
    DescribeTable(DescribeTableInput),
    UpdateTable(UpdateTableInput),
}

/// Adds timeouts and the clock to [`DynamoDbService`].
struct SimService {
    timeout_rate: f32,
    inner: Arc<DynamoDbService>,
}

impl SimService {
    fn new(timeout_rate: f32, service: DynamoDbService) -> Self {
        let inner = Arc::new(service);
        let weak = Arc::downgrade(&inner);
        madsim::task::spawn(async move {
            let mut elapsed = Duration::ZERO;
            while let Some(inner) = weak.upgrade() {
                inner.tick();
                if elapsed >= DAY {
                    inner.reset_daily_limits();
                    elapsed = Duration::ZERO;
                }
                drop(inner);
                madsim::time::sleep(Duration::from_secs(1)).await;
                elapsed += Duration::from_secs(1);
            }
        });
        SimService {
            timeout_rate,
            inner,
        }
    }

    async fn create_table(&self, input: CreateTableInput) -> Result<CreateTableOutput, CreateTableError> {
        self.timeout().await?;
        Ok(self.inner.create_table(input)?)
    }

    async fn describe_table(
        &self,
        input: DescribeTableInput,
    ) -> Result<DescribeTableOutput, DescribeTableError> {
        self.timeout().await?;
        Ok(self.inner.describe_table(input)?)
    }

    async fn update_table(&self, input: UpdateTableInput) -> Result<UpdateTableOutput, UpdateTableError> {
        self.timeout().await?;
        Ok(self.inner.update_table(input)?)
    }

    async fn timeout(&self) -> Result<(), Error> {
        if thread_rng().gen_bool(self.timeout_rate as f64) {
            let t = thread_rng().gen_range(Duration::from_secs(5)..Duration::from_secs(15));
            madsim::time::sleep(t).await;
            tracing::warn!(?t, "dynamodb: request timed out");
            return Err(Error::InternalServerError(
                "Internal server error: request timed out".to_string(),
            ));
        }
        Ok(())
    }
}
