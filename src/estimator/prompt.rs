use crate::estimator::ChatMessage;

/// System instruction anchoring the output schema, string units, and
/// lowercase boolean flags.
pub const SYSTEM_PROMPT: &str = "You estimate the calories of various items in a cafeteria, best as you can, and then give a response in JSON format, for the food items with their values, without showing any of the calculations. The content you display are the protein, fat, carbs, calories, isVegan, isVegetarian, isGlutenFree. Pay special attention making sure that the JSON is formatted correctly and is your only output. Also make sure to fully end the JSON every time. Also set the isVegan, isVegetarian, isGlutenFree to 'true' if true and 'false' if false. Make sure to give an estimate for every type of nutrient.";

/// First worked example: a meat item, every diet flag false.
pub const EXAMPLE_ITEM_ONE: &str = "Chicken Bacon Ranch Wrap";
pub const EXAMPLE_RESPONSE_ONE: &str = r#"{ "Item": "Chicken Bacon Ranch Wrap", "protein": "25g", "fat": "20g", "carbs": "45g", "calories": "480", "isVegan": false, "isVegetarian": false, "isGlutenFree": false }"#;

/// Second worked example: a plant item, every diet flag true.
pub const EXAMPLE_ITEM_TWO: &str = "Cajun Tempeh";
pub const EXAMPLE_RESPONSE_TWO: &str = r#"{ "Item": "Cajun Tempeh", "protein": "15g", "fat": "10g", "carbs": "30g", "calories": "300", "isVegan": true, "isVegetarian": true, "isGlutenFree": true }"#;

/// Assemble the fixed priming transcript: one system turn plus the two
/// worked exchanges. The live item is appended by the caller per request.
pub fn priming_transcript() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(EXAMPLE_ITEM_ONE),
        ChatMessage::assistant(EXAMPLE_RESPONSE_ONE),
        ChatMessage::user(EXAMPLE_ITEM_TWO),
        ChatMessage::assistant(EXAMPLE_RESPONSE_TWO),
    ]
}
