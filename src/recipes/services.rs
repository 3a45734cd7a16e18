use anyhow::{anyhow, Context};
use serde_json::Value;

use super::dto::{Recipe, RecipeRequest};
use crate::llm::{extract_json, ChatMessage, LlmClient};

const JSON_SYSTEM: &str = "You are a strict JSON API. You ONLY return valid JSON.";

fn recipe_prompt(req: &RecipeRequest) -> String {
    format!(
        "You are a certified nutritionist AI.\n\
         \n\
         Generate 1 to 3 healthy Indian recipes for \"{}\" in STRICT JSON ONLY.\n\
         \n\
         Rules:\n\
         - Goal: {}\n\
         - Medical condition: {}\n\
         - Home-style Indian cooking\n\
         \n\
         Each recipe MUST include:\n\
         - title\n\
         - calories (number)\n\
         - protein (number)\n\
         - fats (number)\n\
         - ingredients (array of strings)\n\
         - instructions (single string)\n\
         \n\
         Return ONLY a valid JSON array of recipe objects.\n\
         No markdown.\n\
         No explanations.",
        req.food, req.goal, req.condition,
    )
}

/// Accept either a single recipe object or an array of them; anything else
/// is malformed model output.
fn parse_recipes(raw: &str) -> anyhow::Result<Vec<Recipe>> {
    let json = extract_json(raw).ok_or_else(|| anyhow!("no JSON payload in reply"))?;
    let value: Value = serde_json::from_str(json).context("invalid JSON")?;

    let recipes = match value {
        Value::Array(_) => serde_json::from_value::<Vec<Recipe>>(value)?,
        Value::Object(_) => vec![serde_json::from_value::<Recipe>(value)?],
        _ => return Err(anyhow!("unexpected JSON shape")),
    };

    if recipes.is_empty() {
        return Err(anyhow!("empty recipe list"));
    }
    Ok(recipes)
}

/// No reasonable offline default exists for recipe text, so failures surface
/// to the caller as an error and nothing is logged or persisted.
pub async fn generate(llm: &dyn LlmClient, req: &RecipeRequest) -> anyhow::Result<Vec<Recipe>> {
    let messages = [
        ChatMessage::system(JSON_SYSTEM),
        ChatMessage::user(recipe_prompt(req)),
    ];
    let raw = llm.complete(&messages, 0.5, 900).await?;
    parse_recipes(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::CannedLlm;
    use crate::profile::Goal;

    const ONE_RECIPE: &str = r#"{"title": "Paneer Bhurji", "calories": 320, "protein": 18,
        "fats": 24, "ingredients": ["paneer", "onion", "tomato"], "instructions": "Crumble and saute."}"#;

    fn req() -> RecipeRequest {
        RecipeRequest {
            food: "paneer".into(),
            goal: Goal::Muscle,
            condition: "none".into(),
        }
    }

    #[tokio::test]
    async fn single_object_becomes_one_recipe() {
        let llm = CannedLlm::replying(format!("Here you go: {ONE_RECIPE}"));
        let recipes = generate(&llm, &req()).await.expect("recipes");
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Paneer Bhurji");
        assert_eq!(recipes[0].ingredients.len(), 3);
    }

    #[tokio::test]
    async fn array_reply_yields_many() {
        let llm = CannedLlm::replying(format!("[{ONE_RECIPE}, {ONE_RECIPE}]"));
        let recipes = generate(&llm, &req()).await.expect("recipes");
        assert_eq!(recipes.len(), 2);
    }

    #[tokio::test]
    async fn malformed_reply_is_an_error() {
        let llm = CannedLlm::replying("I'd rather write a poem about paneer.");
        assert!(generate(&llm, &req()).await.is_err());
    }

    #[tokio::test]
    async fn schema_mismatch_is_an_error() {
        let llm = CannedLlm::replying(r#"{"title": "Incomplete"}"#);
        assert!(generate(&llm, &req()).await.is_err());
    }

    #[tokio::test]
    async fn offline_provider_is_an_error() {
        let llm = CannedLlm::offline();
        assert!(generate(&llm, &req()).await.is_err());
    }
}
