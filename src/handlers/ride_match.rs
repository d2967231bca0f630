//! Handler for the `ride.match` subject (§6).

use async_nats::Client;
use futures::StreamExt;
use tracing::{error, info, warn};

use crate::core::match_ride_groups;
use crate::types::{ErrorResponse, MatchRequest, MatchingConfig, Request, SuccessResponse};

pub async fn run(client: Client, config: MatchingConfig) -> anyhow::Result<()> {
    let mut subscriber = client.subscribe("ride.match").await?;
    info!("Listening on ride.match");

    while let Some(message) = subscriber.next().await {
        let Some(reply_subject) = message.reply.clone().map(|s| s.to_string()) else {
            warn!("ride.match message with no reply subject, dropping");
            continue;
        };

        let request: Request<MatchRequest> = match serde_json::from_slice(&message.payload) {
            Ok(request) => request,
            Err(err) => {
                error!("failed to parse ride.match request: {err}");
                let response = ErrorResponse::new(uuid::Uuid::nil(), "INVALID_REQUEST", err.to_string());
                publish_json(&client, &reply_subject, &response).await;
                continue;
            }
        };

        match match_ride_groups(&request.payload, &config) {
            Ok(result) => {
                let response = SuccessResponse::new(request.id, result);
                publish_json(&client, &reply_subject, &response).await;
            }
            Err(err) => {
                error!("ride.match failed: {err}");
                let response = ErrorResponse::new(request.id, "MATCH_FAILED", err.to_string());
                publish_json(&client, &reply_subject, &response).await;
            }
        }
    }

    Ok(())
}

async fn publish_json<T: serde::Serialize>(client: &Client, subject: &str, payload: &T) {
    match serde_json::to_vec(payload) {
        Ok(bytes) => {
            if let Err(err) = client.publish(subject.to_string(), bytes.into()).await {
                error!("failed to publish ride.match response: {err}");
            }
        }
        Err(err) => error!("failed to serialize ride.match response: {err}"),
    }
}
