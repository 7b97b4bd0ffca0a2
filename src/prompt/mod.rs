mod templates;

pub use templates::*;

use crate::types::*;
use thiserror::Error;

/// Template selected by the endpoint, never by request data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptVariant {
    AssetList,
    LessonPlan,
    Remix,
    DeeperDive,
    StudentReply,
}

impl PromptVariant {
    pub const ALL: [PromptVariant; 5] = [
        PromptVariant::AssetList,
        PromptVariant::LessonPlan,
        PromptVariant::Remix,
        PromptVariant::DeeperDive,
        PromptVariant::StudentReply,
    ];

    pub fn temperature(self) -> f32 {
        match self {
            PromptVariant::Remix | PromptVariant::StudentReply => 0.8,
            _ => 0.7,
        }
    }

    /// Whether the reply is expected to hold several `[CARD_BREAK]`-separated assets.
    pub fn is_multi_asset(self) -> bool {
        matches!(self, PromptVariant::AssetList | PromptVariant::LessonPlan)
    }

    pub fn name(self) -> &'static str {
        match self {
            PromptVariant::AssetList => "asset-list",
            PromptVariant::LessonPlan => "lesson-plan",
            PromptVariant::Remix => "remix",
            PromptVariant::DeeperDive => "deeper-dive",
            PromptVariant::StudentReply => "student-reply",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// A request payload that can be checked and turned into model instructions.
///
/// `build_prompt` assumes `validate` already passed for the same variant.
pub trait PromptSource {
    fn validate(&self, variant: PromptVariant) -> Result<(), ValidationError>;
    fn build_prompt(&self, variant: PromptVariant) -> String;
}

fn require(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError(format!("Missing required field: {}.", field)));
    }
    Ok(())
}

impl PromptSource for GenerationRequest {
    fn validate(&self, variant: PromptVariant) -> Result<(), ValidationError> {
        if self.asset_types().is_empty() {
            return Err(ValidationError(
                "Please select at least one asset type (outputTypes).".to_string(),
            ));
        }

        match (variant, self.duration) {
            (PromptVariant::LessonPlan, None) => Err(ValidationError(
                "A lesson plan requires a class duration in minutes.".to_string(),
            )),
            (_, Some(0)) => Err(ValidationError(
                "The class duration must be a positive number of minutes.".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn build_prompt(&self, variant: PromptVariant) -> String {
        match (variant, self.duration) {
            (PromptVariant::LessonPlan, Some(duration)) => lesson_plan_prompt(self, duration),
            _ => asset_list_prompt(self),
        }
    }
}

impl PromptSource for CardRequest {
    fn validate(&self, _variant: PromptVariant) -> Result<(), ValidationError> {
        require(&self.card_title, "cardTitle")?;
        require(&self.card_content, "cardContent")
    }

    fn build_prompt(&self, variant: PromptVariant) -> String {
        match variant {
            PromptVariant::DeeperDive => deeper_dive_prompt(self),
            _ => remix_prompt(self),
        }
    }
}

impl PromptSource for StudentReplyRequest {
    fn validate(&self, _variant: PromptVariant) -> Result<(), ValidationError> {
        require(&self.card_content, "cardContent")?;
        require(&self.student_reply, "studentReply")
    }

    fn build_prompt(&self, _variant: PromptVariant) -> String {
        student_reply_prompt(self)
    }
}
