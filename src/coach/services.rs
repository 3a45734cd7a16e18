use tracing::warn;

use super::dto::ChatProfile;
use crate::llm::{ChatMessage, LlmClient};

/// Western foods the coach is never allowed to suggest. A reply containing
/// any of these is discarded in favor of the offline fallback.
const FORBIDDEN: [&str; 8] = [
    "pizza", "pasta", "burger", "salad", "sandwich", "oats", "cereal", "toast",
];

fn system_prompt(profile: &ChatProfile) -> String {
    format!(
        "You are an expert Indian nutritionist and diet coach.\n\
         \n\
         STRICT RULES (VERY IMPORTANT):\n\
         - ONLY Indian food\n\
         - NO Western food ever\n\
         - NO pizza, pasta, burger, salad, sandwich, oats, cereal\n\
         - Use Indian meals only\n\
         \n\
         ALLOWED FOODS:\n\
         roti, chapati, rice, dal, rajma, chole, sabzi, paneer,\n\
         curd, buttermilk, egg bhurji, chicken curry,\n\
         fish curry, idli, dosa, upma, poha, khichdi,\n\
         millets (jowar, bajra, ragi)\n\
         \n\
         USER PROFILE:\n\
         Diet type: {}\n\
         Medical condition: {}\n\
         Goal: {}\n\
         \n\
         HEALTH RULES:\n\
         - If diabetes: avoid sugar, white rice, potatoes\n\
         - If veg: no meat or fish\n\
         - If non-veg: chicken, egg, fish allowed\n\
         - Prefer home-style Indian meals\n\
         \n\
         FORMAT RULES:\n\
         - Short response\n\
         - Simple language\n\
         - Max 3-4 lines\n\
         - Suggest practical Indian food only\n\
         \n\
         If you suggest non-Indian food the response is INVALID.",
        profile.diet_type, profile.condition, profile.goal,
    )
}

fn contains_forbidden(reply: &str) -> bool {
    let reply = reply.to_lowercase();
    FORBIDDEN.iter().any(|w| reply.contains(w))
}

/// Rule-based reply for when the provider is down, returns nothing, or
/// suggests forbidden food. Keyed on simple keyword matches.
pub fn fallback_reply(message: &str, profile: &ChatProfile) -> String {
    let text = message.to_lowercase();

    if text.contains("dinner") {
        if profile.condition == "diabetes" {
            return "Have mixed vegetable sabzi, dal, and jowar roti. Avoid rice and sugar.".into();
        }
        if profile.diet_type == "non-veg" {
            return "Chicken curry with 2 rotis and vegetable sabzi is a good Indian dinner.".into();
        }
        return "Dal, seasonal sabzi, 2 rotis, and curd make a healthy Indian dinner.".into();
    }

    if text.contains("protein") {
        return "Good Indian protein sources are dal, paneer, curd, eggs, rajma, and chole.".into();
    }

    if text.contains("diabetes") {
        return "Prefer millets, dal, vegetables, and avoid sugar and refined carbs.".into();
    }

    if text.contains("weight loss") {
        return "For weight loss, eat smaller portions, more sabzi, dal, and avoid fried food.".into();
    }

    "I can help with Indian meals, dinner ideas, nutrition, and health goals.".into()
}

pub async fn coach_reply(llm: &dyn LlmClient, message: &str, profile: &ChatProfile) -> String {
    let messages = [
        ChatMessage::system(system_prompt(profile)),
        ChatMessage::assistant("A healthy Indian dinner can be dal, vegetable sabzi, 2 rotis, and curd."),
        ChatMessage::user(message),
    ];

    match llm.complete(&messages, 0.6, 300).await {
        Ok(reply) if reply.is_empty() => {
            warn!("coach reply was empty; using fallback");
            fallback_reply(message, profile)
        }
        Ok(reply) if contains_forbidden(&reply) => {
            warn!("coach reply contained forbidden food; using fallback");
            fallback_reply(message, profile)
        }
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "coach completion failed; using fallback");
            fallback_reply(message, profile)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::CannedLlm;

    fn veg_profile() -> ChatProfile {
        ChatProfile::default()
    }

    #[tokio::test]
    async fn falls_back_when_llm_is_down() {
        let llm = CannedLlm::offline();
        let reply = coach_reply(&llm, "what should I eat for dinner?", &veg_profile()).await;
        assert_eq!(
            reply,
            "Dal, seasonal sabzi, 2 rotis, and curd make a healthy Indian dinner."
        );
    }

    #[tokio::test]
    async fn screens_forbidden_foods() {
        let llm = CannedLlm::replying("Have a cheese pizza tonight!");
        let reply = coach_reply(&llm, "dinner idea please", &veg_profile()).await;
        assert!(!reply.to_lowercase().contains("pizza"));
    }

    #[tokio::test]
    async fn passes_clean_replies_through() {
        let llm = CannedLlm::replying("Dal and 2 rotis with curd is a good choice.");
        let reply = coach_reply(&llm, "dinner idea please", &veg_profile()).await;
        assert_eq!(reply, "Dal and 2 rotis with curd is a good choice.");
    }

    #[test]
    fn fallback_covers_keyword_branches() {
        let mut profile = veg_profile();
        assert!(fallback_reply("need protein tips", &profile).contains("dal"));
        assert!(fallback_reply("I have diabetes", &profile).contains("millets"));
        assert!(fallback_reply("weight loss help", &profile).contains("smaller portions"));
        assert!(fallback_reply("hello", &profile).contains("Indian meals"));

        profile.condition = "diabetes".into();
        assert!(fallback_reply("dinner?", &profile).contains("jowar"));

        profile.condition = "none".into();
        profile.diet_type = "non-veg".into();
        assert!(fallback_reply("dinner?", &profile).contains("Chicken"));
    }
}
