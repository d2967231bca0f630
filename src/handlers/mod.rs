//! NATS subject handlers. Each subject runs its own subscriber loop as an
//! independent task; `start_handlers` just fans them out and waits on
//! whichever exits first.

pub mod ping;
pub mod ride_match;

use async_nats::Client;
use tracing::error;

use crate::types::MatchingConfig;

pub async fn start_handlers(client: Client, config: MatchingConfig) -> anyhow::Result<()> {
    let ping_client = client.clone();
    let ping_task = tokio::spawn(async move {
        if let Err(err) = ping::run(ping_client).await {
            error!("ping handler exited: {err}");
        }
    });

    let match_task = tokio::spawn(async move {
        if let Err(err) = ride_match::run(client, config).await {
            error!("ride.match handler exited: {err}");
        }
    });

    tokio::select! {
        _ = ping_task => {}
        _ = match_task => {}
    }

    Ok(())
}
