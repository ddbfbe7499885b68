mod openai;
pub mod prompt;

pub use openai::{
    API_BASE_URL, ChatMessage, FREQUENCY_PENALTY, MAX_TOKENS, MODEL, NutritionEstimator,
    OpenAiEstimator, PRESENCE_PENALTY, TEMPERATURE, TOP_P, parse_estimate,
};
