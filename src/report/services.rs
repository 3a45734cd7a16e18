use bytes::Bytes;
use tracing::warn;

use crate::foodlog::dto::DayTotals;
use crate::llm::{ChatMessage, LlmClient};
use crate::profile::{services as profile_services, NutritionTargets, UserProfile};

fn summary_prompt(profile: &UserProfile, targets: &NutritionTargets) -> String {
    format!(
        "Write a short medical summary for a doctor.\n\
         \n\
         Patient details:\n\
         Age: {}\n\
         Sex: {}\n\
         Weight: {} kg\n\
         Height: {} cm\n\
         Goal: {}\n\
         Condition: {}\n\
         \n\
         Daily intake:\n\
         Calories: {} kcal\n\
         Protein: {} g\n\
         Fats: {} g\n\
         \n\
         Rules:\n\
         - Use simple medical language\n\
         - Indian diet context\n\
         - Max 5-6 lines\n\
         - No emojis",
        profile.age,
        profile.sex,
        profile.weight,
        profile.height,
        profile.goal,
        if profile.condition.is_empty() {
            "None"
        } else {
            profile.condition.as_str()
        },
        targets.calories,
        targets.protein,
        targets.fats,
    )
}

fn fallback_summary(profile: &UserProfile, targets: &NutritionTargets) -> String {
    let bmi = profile_services::bmi(profile);
    format!(
        "Patient is a {}-year-old {} with BMI {:.1} ({}). Current dietary plan \
         targets {} kcal, {} g protein and {} g fat per day, oriented towards \
         {}. Reported condition: {}. Intake is tracked daily through the \
         NutriScan food log.",
        profile.age,
        profile.sex.to_lowercase(),
        bmi,
        profile_services::bmi_label(bmi),
        targets.calories,
        targets.protein,
        targets.fats,
        profile.goal,
        if profile.condition.is_empty() {
            "none"
        } else {
            profile.condition.as_str()
        },
    )
}

async fn medical_summary(
    llm: &dyn LlmClient,
    profile: &UserProfile,
    targets: &NutritionTargets,
) -> String {
    let messages = [
        ChatMessage::system("You are a clinical nutrition assistant writing concise summaries for doctors."),
        ChatMessage::user(summary_prompt(profile, targets)),
    ];
    match llm.complete(&messages, 0.4, 300).await {
        Ok(summary) if !summary.is_empty() => summary,
        Ok(_) => fallback_summary(profile, targets),
        Err(e) => {
            warn!(error = %e, "medical summary failed; using template");
            fallback_summary(profile, targets)
        }
    }
}

/// Render the exportable report document. Read-only over the session state;
/// export failure can never corrupt the food log.
pub async fn render_report(
    llm: &dyn LlmClient,
    profile: &UserProfile,
    targets: &NutritionTargets,
    today: &str,
    totals: &DayTotals,
) -> Bytes {
    let bmi = profile_services::bmi(profile);
    let summary = medical_summary(llm, profile, targets).await;

    let doc = format!(
        "NUTRISCAN MEDICAL REPORT\n\
         ========================\n\
         Generated: {today}\n\
         \n\
         PATIENT\n\
         Name:      {name}\n\
         Sex:       {sex}\n\
         Age:       {age}\n\
         Height:    {height} cm\n\
         Weight:    {weight} kg\n\
         BMI:       {bmi:.1} ({bmi_label})\n\
         Goal:      {goal}\n\
         Condition: {condition}\n\
         \n\
         DAILY TARGETS\n\
         Calories:  {t_cal} kcal\n\
         Protein:   {t_pro} g\n\
         Fats:      {t_fat} g\n\
         \n\
         INTAKE TODAY\n\
         Calories:  {d_cal} kcal\n\
         Protein:   {d_pro} g\n\
         Fats:      {d_fat} g\n\
         \n\
         OUTLOOK\n\
         {prediction}\n\
         \n\
         SUMMARY\n\
         {summary}\n",
        today = today,
        name = if profile.name.is_empty() { "-" } else { profile.name.as_str() },
        sex = profile.sex,
        age = profile.age,
        height = profile.height,
        weight = profile.weight,
        bmi = bmi,
        bmi_label = profile_services::bmi_label(bmi),
        goal = profile.goal,
        condition = if profile.condition.is_empty() { "none" } else { profile.condition.as_str() },
        t_cal = targets.calories,
        t_pro = targets.protein,
        t_fat = targets.fats,
        d_cal = totals.calories,
        d_pro = totals.protein,
        d_fat = totals.fats,
        prediction = profile_services::prediction_text(profile),
        summary = summary,
    );

    Bytes::from(doc)
}
