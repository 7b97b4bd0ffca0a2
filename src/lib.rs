pub mod api;
pub mod cards;
pub mod config;
pub mod error;
pub mod prompt;
pub mod store;
pub mod types;
pub mod upstream;

pub use api::{create_app, create_router, AppState};
pub use cards::{split_cards, Card};
pub use config::ServerConfig;
pub use error::ApiError;
pub use prompt::{PromptSource, PromptVariant, ValidationError};
pub use store::{MemoryPlanStore, PlanStore};
pub use types::*;
pub use upstream::{LlmClient, LlmConfig, Upstream, UpstreamError};
