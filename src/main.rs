pub mod chronometer;
pub mod configuration;
pub mod create_server;
pub mod error;
pub mod logger;
pub mod server;
pub mod state;

use self::{configuration::Configuration, create_server::create_server, error::Error, logger::Logger, server::Server, state::State};
use std::{net::SocketAddr, sync::Arc};
use tokio::runtime::Runtime;

fn main() {
    let configuration = Configuration::new();
    let logger = Logger::new();

    let state = Arc::new(State::new(configuration.custom_converter().cloned(), logger));
    for (name, converter) in state.converters() {
        logger.log(format!("Serving {} {}", name, converter));
    }

    let address = SocketAddr::new(configuration.host(), configuration.port());
    let runtime = match Runtime::new() {
        Ok(runtime) => runtime,
        Err(error) => {
            logger.log(format!("Could not start runtime: {}", error));
            return;
        }
    };
    runtime.block_on(async move {
        let server = create_server(state);
        logger.log(format!("Listening on {}", address));
        if let Err(error) = server.run(address).await {
            logger.log(format!("Server error: {}", error));
        }
    });
}
