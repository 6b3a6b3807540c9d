//! Minimal end-to-end wiring: log in, open a conversation, send one
//! message and wait for the video (or a terminal failure).
//!
//! ```bash
//! PERSONA_API_BASE_URL=https://persona.example.com \
//! PERSONA_EMAIL=ada@example.com PERSONA_PASSWORD=secret \
//! cargo run --example chat_session
//! ```

use persona::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::load()?;
    let client = Arc::new(ApiClient::new(&config)?);

    let email = std::env::var("PERSONA_EMAIL")?;
    let password = std::env::var("PERSONA_PASSWORD")?;
    let auth = client.auth().login(&email, &password).await?;
    println!("logged in as {}", auth.user.name);

    match destination_for(Some(&auth.user)) {
        Destination::Dashboard => {}
        destination => {
            println!("account must finish {:?} first", destination);
            return Ok(());
        }
    }

    let conversation = client.conversations().create_default().await?;
    let (mut session, mut events) = ChatSession::new(client.clone());
    session.open(&conversation.id).await?;

    let outcome = session.send("Hello! Tell me about my day.").await?;
    println!("send outcome: {:?}", outcome);

    if outcome == SendOutcome::GeneratingVideo {
        while let Some(event) = events.recv().await {
            match event {
                ChatEvent::GenerationStarted { task_id, .. } => {
                    println!("video task {} started", task_id);
                }
                ChatEvent::VideoReady { video_url, .. } => {
                    println!("video ready: {}", video_url);
                    break;
                }
                ChatEvent::VideoFailed { .. } => {
                    println!("video generation failed");
                    break;
                }
                ChatEvent::VideoTimedOut { .. } => {
                    println!("video generation timed out");
                    break;
                }
                ChatEvent::SendFailed { detail } => {
                    println!("send failed: {}", detail);
                    break;
                }
            }
        }
    }

    for message in session.messages().await {
        println!("[{:?}] {}", message.role, message.content);
    }

    Ok(())
}
