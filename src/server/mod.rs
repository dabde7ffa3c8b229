pub mod api;

use crate::agent::ChatRelay;
use std::error::Error;
use std::sync::Arc;

pub struct Server {
    addr: String,
    relay: Arc<ChatRelay>,
}

impl Server {
    pub fn new(addr: String, relay: Arc<ChatRelay>) -> Self {
        Self { addr, relay }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(&self.addr, self.relay.clone()).await
    }
}
