//! WebSocket signal channel
//!
//! Each connected client subscribes to the [`EventBus`](optimus_common::EventBus)
//! and receives bare event names (`case_solved`, ...) as text frames. Clients
//! that miss a signal while disconnected resynchronize through REST; nothing
//! is replayed. A text frame sent by a client that names a known event is
//! re-published to every client.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use optimus_common::SocietyEvent;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::AppState;

/// GET /ws
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let mut rx = state.events.subscribe();
    info!(
        "WebSocket client connected, total clients: {}",
        state.events.subscriber_count()
    );

    let mut send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if sender.send(Message::Text(event.name().to_string())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("WebSocket client lagged, skipped {} signals", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let events = state.events.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = receiver.next().await {
            match message {
                Message::Text(text) => match text.parse::<SocietyEvent>() {
                    Ok(event) => {
                        info!("WebSocket client relayed {}", event);
                        events.publish(event);
                    }
                    Err(_) => debug!("WebSocket received: {}", text),
                },
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    // Whichever side finishes first ends the connection
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    info!("WebSocket client disconnected");
}
