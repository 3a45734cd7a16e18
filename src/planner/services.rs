use rand::seq::SliceRandom;
use tracing::warn;

use super::dto::{DayPlan, DinnerIdea, DinnerRequest, PlanMeal, PlanRequest, WeeklyPlan};
use super::ideas::{IdeaRecord, DINNER_IDEAS};
use crate::llm::{extract_json, ChatMessage, LlmClient};

const JSON_SYSTEM: &str = "You are a strict JSON API. You ONLY return valid JSON.";

fn dinner_prompt(req: &DinnerRequest) -> String {
    format!(
        "You are a certified nutritionist AI.\n\
         \n\
         Suggest ONE Indian dinner in STRICT JSON ONLY.\n\
         \n\
         Rules:\n\
         - Diet type: {}\n\
         - Remaining calories: approx {}\n\
         - Goal: {}\n\
         - Medical condition: {}\n\
         - Make it a strictly Indian meal\n\
         \n\
         Return ONLY valid JSON.\n\
         No markdown.\n\
         No explanations.\n\
         \n\
         JSON FORMAT:\n\
         {{ \"name\": \"\", \"calories\": 0, \"desc\": \"\", \"note\": \"\" }}",
        req.diet_type, req.remaining_calories, req.goal, req.condition,
    )
}

fn plan_prompt(req: &PlanRequest) -> String {
    format!(
        "You are a certified nutritionist AI.\n\
         \n\
         Generate a FULL 7-day meal plan in STRICT JSON ONLY.\n\
         \n\
         Rules:\n\
         - Diet type: {}\n\
         - Daily calories: approx {}\n\
         - Goal: {}\n\
         - Medical condition: {}\n\
         - Make it strictly Indian meals\n\
         \n\
         Each day MUST include:\n\
         - breakfast\n\
         - lunch\n\
         - dinner\n\
         \n\
         Each meal MUST include:\n\
         - title\n\
         - calories (number)\n\
         - protein (number)\n\
         \n\
         Return ONLY valid JSON.\n\
         No markdown.\n\
         No explanations.\n\
         \n\
         JSON FORMAT:\n\
         {{\n\
           \"Monday\": {{\n\
             \"breakfast\": {{ \"title\": \"\", \"calories\": 0, \"protein\": 0 }},\n\
             \"lunch\": {{ \"title\": \"\", \"calories\": 0, \"protein\": 0 }},\n\
             \"dinner\": {{ \"title\": \"\", \"calories\": 0, \"protein\": 0 }}\n\
           }}\n\
         }}\n\
         Include all seven days, Monday through Sunday.",
        req.diet_type, req.calories, req.goal, req.condition,
    )
}

/// Offline dinner pick: filter the static table by diet and condition, prefer
/// ideas that fit the remaining calories, otherwise the lightest candidate.
pub fn fallback_dinner(req: &DinnerRequest) -> DinnerIdea {
    let filtered: Vec<&IdeaRecord> = DINNER_IDEAS
        .iter()
        .filter(|i| req.diet_type == "other" || i.diet == req.diet_type)
        .filter(|i| req.condition == "none" || i.conditions.contains(&req.condition.as_str()))
        .collect();
    let pool = if filtered.is_empty() {
        DINNER_IDEAS.iter().collect()
    } else {
        filtered
    };

    let within: Vec<&IdeaRecord> = pool
        .iter()
        .copied()
        .filter(|i| i.calories <= req.remaining_calories)
        .collect();

    let chosen = within
        .choose(&mut rand::thread_rng())
        .copied()
        .or_else(|| pool.iter().copied().min_by_key(|i| i.calories))
        .unwrap_or(&DINNER_IDEAS[0]);

    DinnerIdea {
        name: chosen.name.to_string(),
        calories: chosen.calories,
        desc: format!(
            "Approx {} kcal with {} g protein ({}).",
            chosen.calories,
            chosen.protein,
            chosen.tags.join(", "),
        ),
        note: Some("Offline suggestion based on your remaining calories.".into()),
    }
}

pub async fn dinner_idea(llm: &dyn LlmClient, req: &DinnerRequest) -> DinnerIdea {
    if req.remaining_calories <= 0 {
        return DinnerIdea {
            name: "Calorie Limit Reached".into(),
            calories: 0,
            desc: "You've already met your calorie goal.".into(),
            note: None,
        };
    }

    let messages = [
        ChatMessage::system(JSON_SYSTEM),
        ChatMessage::user(dinner_prompt(req)),
    ];

    match llm.complete(&messages, 0.4, 300).await {
        Ok(raw) => match extract_json(&raw).and_then(|j| serde_json::from_str(j).ok()) {
            Some(idea) => idea,
            None => {
                warn!(raw = %raw, "dinner suggestion was not valid JSON; using fallback");
                fallback_dinner(req)
            }
        },
        Err(e) => {
            warn!(error = %e, "dinner completion failed; using fallback");
            fallback_dinner(req)
        }
    }
}

fn meal(title: &str, calories: i64, protein: i64) -> PlanMeal {
    PlanMeal {
        title: title.into(),
        calories,
        protein,
    }
}

fn day(breakfast: PlanMeal, lunch: PlanMeal, dinner: PlanMeal) -> DayPlan {
    DayPlan {
        breakfast,
        lunch,
        dinner,
    }
}

/// Static week served when plan generation fails. Home-style Indian meals,
/// roughly maintenance-calorie.
pub fn fallback_plan() -> WeeklyPlan {
    WeeklyPlan {
        monday: day(
            meal("Poha with peanuts", 350, 9),
            meal("Dal, rice and sabzi", 550, 20),
            meal("Vegetable khichdi with curd", 450, 16),
        ),
        tuesday: day(
            meal("Idli with sambar", 320, 10),
            meal("Rajma chawal", 560, 18),
            meal("Paneer bhurji with 2 rotis", 520, 26),
        ),
        wednesday: day(
            meal("Upma with vegetables", 340, 8),
            meal("Chole with 2 rotis", 540, 19),
            meal("Dal and jowar roti", 430, 17),
        ),
        thursday: day(
            meal("Moong dal chilla", 300, 16),
            meal("Vegetable pulao with curd", 520, 14),
            meal("Palak paneer with roti", 500, 22),
        ),
        friday: day(
            meal("Dosa with chutney", 380, 8),
            meal("Dal, rice and mixed sabzi", 550, 20),
            meal("Egg bhurji with 2 rotis", 480, 24),
        ),
        saturday: day(
            meal("Poha with sprouts", 360, 12),
            meal("Paneer wrap in roti", 500, 22),
            meal("Dal and steamed rice", 460, 18),
        ),
        sunday: day(
            meal("Aloo paratha with curd", 450, 11),
            meal("Vegetable biryani with raita", 580, 14),
            meal("Khichdi with buttermilk", 420, 15),
        ),
    }
}

pub async fn weekly_plan(llm: &dyn LlmClient, req: &PlanRequest) -> WeeklyPlan {
    let messages = [
        ChatMessage::system(JSON_SYSTEM),
        ChatMessage::user(plan_prompt(req)),
    ];

    match llm.complete(&messages, 0.3, 1200).await {
        Ok(raw) => match extract_json(&raw).and_then(|j| serde_json::from_str(j).ok()) {
            Some(plan) => plan,
            None => {
                warn!("meal plan was not valid JSON; using fallback plan");
                fallback_plan()
            }
        },
        Err(e) => {
            warn!(error = %e, "meal plan completion failed; using fallback plan");
            fallback_plan()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::CannedLlm;
    use crate::profile::Goal;

    fn dinner_req(remaining: i64, diet: &str, condition: &str) -> DinnerRequest {
        DinnerRequest {
            remaining_calories: remaining,
            diet_type: diet.into(),
            condition: condition.into(),
            goal: Goal::Maintenance,
        }
    }

    #[tokio::test]
    async fn zero_remaining_calories_short_circuits() {
        let llm = CannedLlm::replying("{\"name\": \"ignored\", \"calories\": 1, \"desc\": \"x\"}");
        let idea = dinner_idea(&llm, &dinner_req(0, "veg", "none")).await;
        assert_eq!(idea.name, "Calorie Limit Reached");
        assert_eq!(idea.calories, 0);
    }

    #[tokio::test]
    async fn valid_json_reply_is_used() {
        let llm = CannedLlm::replying(
            "Here it is: {\"name\": \"Dal Tadka + Roti\", \"calories\": 400, \"desc\": \"Light and filling\"}",
        );
        let idea = dinner_idea(&llm, &dinner_req(600, "veg", "none")).await;
        assert_eq!(idea.name, "Dal Tadka + Roti");
        assert_eq!(idea.calories, 400);
    }

    #[tokio::test]
    async fn malformed_reply_falls_back_to_table() {
        let llm = CannedLlm::replying("sorry, I can't do JSON today");
        let idea = dinner_idea(&llm, &dinner_req(600, "veg", "none")).await;
        assert!(DINNER_IDEAS.iter().any(|i| i.name == idea.name));
        assert!(idea.note.is_some());
    }

    #[test]
    fn fallback_respects_diet_type() {
        for _ in 0..20 {
            let idea = fallback_dinner(&dinner_req(800, "veg", "none"));
            let record = DINNER_IDEAS
                .iter()
                .find(|i| i.name == idea.name)
                .expect("idea from table");
            assert_eq!(record.diet, "veg");
        }
    }

    #[test]
    fn fallback_respects_condition_and_calories() {
        for _ in 0..20 {
            let idea = fallback_dinner(&dinner_req(400, "veg", "diabetes"));
            let record = DINNER_IDEAS
                .iter()
                .find(|i| i.name == idea.name)
                .expect("idea from table");
            assert!(record.conditions.contains(&"diabetes"));
            assert!(record.calories <= 400);
        }
    }

    #[test]
    fn fallback_picks_lightest_when_nothing_fits() {
        let idea = fallback_dinner(&dinner_req(50, "veg", "none"));
        let lightest = DINNER_IDEAS
            .iter()
            .filter(|i| i.diet == "veg")
            .map(|i| i.calories)
            .min()
            .expect("table not empty");
        assert_eq!(idea.calories, lightest);
    }

    fn plan_req() -> PlanRequest {
        PlanRequest {
            calories: 2200,
            goal: Goal::Maintenance,
            condition: "none".into(),
            diet_type: "veg".into(),
        }
    }

    #[tokio::test]
    async fn weekly_plan_falls_back_when_offline() {
        let llm = CannedLlm::offline();
        let plan = weekly_plan(&llm, &plan_req()).await;
        assert_eq!(plan, fallback_plan());
    }

    #[tokio::test]
    async fn weekly_plan_rejects_partial_weeks() {
        // Only Monday present: the shape check must fail and fall back.
        let llm = CannedLlm::replying(
            "{\"Monday\": {\"breakfast\": {\"title\": \"Poha\", \"calories\": 300, \"protein\": 8},\
             \"lunch\": {\"title\": \"Dal rice\", \"calories\": 500, \"protein\": 18},\
             \"dinner\": {\"title\": \"Khichdi\", \"calories\": 400, \"protein\": 14}}}",
        );
        let plan = weekly_plan(&llm, &plan_req()).await;
        assert_eq!(plan, fallback_plan());
    }

    #[tokio::test]
    async fn weekly_plan_accepts_a_full_week() {
        let full = serde_json::to_string(&fallback_plan()).expect("serialize");
        let llm = CannedLlm::replying(format!("```json\n{full}\n```"));
        let plan = weekly_plan(&llm, &plan_req()).await;
        assert_eq!(plan, fallback_plan());
    }
}
