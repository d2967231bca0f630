//! Trivial liveness-check handler, kept for ops parity with the rest of
//! the fleet's workers.

use async_nats::Client;
use futures::StreamExt;
use tracing::info;

pub async fn run(client: Client) -> anyhow::Result<()> {
    let mut subscriber = client.subscribe("ride.ping").await?;
    info!("Listening on ride.ping");

    while let Some(message) = subscriber.next().await {
        if let Some(reply) = message.reply {
            let _ = client.publish(reply, "pong".into()).await;
        }
    }

    Ok(())
}
