//! # Persona
//!
//! Client SDK for the Persona digital-self platform: authenticate,
//! walk the onboarding wizard, then chat with an AI avatar that may
//! answer with synthesized video.
//!
//! ## Overview
//!
//! The SDK is presentational-framework agnostic. It gives a UI:
//!
//! - **A typed API client** for every backend endpoint (auth, users,
//!   conversations, chat, knowledge, avatars, voice cloning)
//! - **Chat sessions** with optimistic sends and background polling of
//!   video generation jobs
//! - **The onboarding state machine** (video capture plan, reading
//!   script, personality sliders)
//! - **Route guards** deciding auth/onboarding/dashboard navigation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use persona::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::load()?;
//!     let client = Arc::new(ApiClient::new(&config)?);
//!
//!     client.auth().login("ada@example.com", "secret").await?;
//!
//!     let conversation = client.conversations().create_default().await?;
//!     let (mut session, mut events) = ChatSession::new(client.clone());
//!     session.open(&conversation.id).await?;
//!
//!     session.send("Hello, me!").await?;
//!     while let Some(event) = events.recv().await {
//!         match event {
//!             ChatEvent::VideoReady { video_url, .. } => {
//!                 println!("video at {}", video_url);
//!                 break;
//!             }
//!             ChatEvent::VideoFailed { .. } | ChatEvent::VideoTimedOut { .. } => break,
//!             _ => {}
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Persona is organized into focused crates:
//!
//! - **`persona-client`**: typed REST client and session context
//! - **`persona-chat`**: conversation sessions and video-job polling
//! - **`persona-onboarding`**: onboarding wizard state machine
//!
//! ## License
//!
//! MIT

pub mod prelude;

pub use persona_client::{
    destination_for, ApiClient, ApiError, AuthReply, AvatarRecord, ChatMessage, ChatTransport,
    ClientConfig, Conversation, ConversationSummary, Destination, KnowledgeCreate, KnowledgeEntry,
    PersonalityTraits, Preferences, ProfileUpdate, Role, SendReply, TaskStatus, UserProfile,
    VideoPhase, VideoStatusReply, VoiceCloneStatus, VoiceCloneTicket,
};

pub use persona_chat::{
    spawn_video_poller, CancelToken, ChatEvent, ChatSession, MessageStore, PollerConfig,
    PollerHandle, SendOutcome, SharedStore, VideoJob,
};

pub use persona_onboarding::{
    avatar_segments, reading_script, CaptureSegment, CaptureTimeline, OnboardingBackend,
    OnboardingError, OnboardingFlow, OnboardingStep, PersonalitySliders, RecordedClip,
};
