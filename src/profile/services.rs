use thiserror::Error;

use super::dto::{Goal, NutritionTargets, UserProfile};

/// Profile bounds are enforced here, before any target math runs. The
/// calculators themselves do not validate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Please enter a valid age (5-100)")]
    InvalidAge,
    #[error("Please enter a valid height (100-250 cm)")]
    InvalidHeight,
    #[error("Please enter a valid weight (30-300 kg)")]
    InvalidWeight,
    #[error("Please select sex")]
    MissingSex,
}

pub fn validate(profile: &UserProfile) -> Result<(), ProfileError> {
    if !(5..=100).contains(&profile.age) {
        return Err(ProfileError::InvalidAge);
    }
    if !(100.0..=250.0).contains(&profile.height) {
        return Err(ProfileError::InvalidHeight);
    }
    if !(30.0..=300.0).contains(&profile.weight) {
        return Err(ProfileError::InvalidWeight);
    }
    if profile.sex.trim().is_empty() {
        return Err(ProfileError::MissingSex);
    }
    Ok(())
}

/// Mifflin-St Jeor estimate with a fixed 1.4 activity multiplier and a flat
/// goal adjustment. An explicit calorie goal on the profile overrides the
/// whole computation.
///
/// Only `sex == "Male"` takes the +5 branch; every other value gets -161.
/// That asymmetry mirrors the product behavior and stays until product says
/// otherwise.
pub fn daily_calories(profile: &UserProfile) -> i64 {
    if let Some(goal) = profile.calorie_goal {
        return goal;
    }

    let UserProfile {
        age,
        height,
        weight,
        ..
    } = *profile;

    let bmr = 10.0 * weight + 6.25 * height - 5.0 * f64::from(age)
        + if profile.sex == "Male" { 5.0 } else { -161.0 };

    let mut calories = bmr * 1.4;
    calories += match profile.goal {
        Goal::Loss => -400.0,
        Goal::Gain => 300.0,
        Goal::Muscle => 500.0,
        Goal::Maintenance => 0.0,
    };
    calories.round() as i64
}

pub fn daily_protein(profile: &UserProfile) -> i64 {
    let per_kg = match profile.goal {
        Goal::Loss => 1.6,
        Goal::Muscle => 2.0,
        _ => 1.8,
    };
    (profile.weight * per_kg).round() as i64
}

/// 27% of calories from fat, 9 kcal per gram.
pub fn daily_fats(calories: i64) -> i64 {
    (calories as f64 * 0.27 / 9.0).round() as i64
}

pub fn targets(profile: &UserProfile) -> NutritionTargets {
    let calories = daily_calories(profile);
    NutritionTargets {
        calories,
        protein: daily_protein(profile),
        fats: daily_fats(calories),
    }
}

/// BMI to one decimal.
pub fn bmi(profile: &UserProfile) -> f64 {
    let meters = profile.height / 100.0;
    let raw = profile.weight / (meters * meters);
    (raw * 10.0).round() / 10.0
}

pub fn bmi_label(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "U"
    } else if bmi < 25.0 {
        "N"
    } else if bmi < 30.0 {
        "O"
    } else {
        "Ob"
    }
}

/// Goal-keyed weight-trend blurb shown on the dashboard and in the report.
pub fn prediction_text(profile: &UserProfile) -> String {
    match profile.goal {
        Goal::Loss => format!(
            "On track to reach {:.1} kg in the next few weeks.",
            profile.weight - 2.0
        ),
        Goal::Gain => format!(
            "On track to reach {:.1} kg in the next few weeks.",
            profile.weight + 2.0
        ),
        Goal::Muscle => "Building lean mass steadily over the next few weeks.".into(),
        Goal::Maintenance => "Maintaining current weight trend.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male_70kg() -> UserProfile {
        UserProfile {
            name: "Test".into(),
            sex: "Male".into(),
            age: 25,
            height: 175.0,
            weight: 70.0,
            goal: Goal::Maintenance,
            condition: "none".into(),
            calorie_goal: None,
        }
    }

    #[test]
    fn calories_follow_mifflin_st_jeor() {
        // bmr = 10*70 + 6.25*175 - 5*25 + 5 = 1673.75; * 1.4 = 2343.25
        assert_eq!(daily_calories(&male_70kg()), 2343);
    }

    #[test]
    fn non_male_sex_uses_minus_161_branch() {
        let mut p = male_70kg();
        p.sex = "Female".into();
        // bmr = 1673.75 - 166 = 1507.75; * 1.4 = 2110.85
        assert_eq!(daily_calories(&p), 2111);

        // Any other value takes the same branch.
        p.sex = "Other".into();
        assert_eq!(daily_calories(&p), 2111);
    }

    #[test]
    fn goal_adjustments_apply_after_activity_multiplier() {
        let base = daily_calories(&male_70kg());
        for (goal, delta) in [
            (Goal::Loss, -400),
            (Goal::Gain, 300),
            (Goal::Muscle, 500),
        ] {
            let mut p = male_70kg();
            p.goal = goal;
            assert_eq!(daily_calories(&p), base + delta);
        }
    }

    #[test]
    fn explicit_calorie_goal_overrides_everything() {
        let mut p = male_70kg();
        p.calorie_goal = Some(2000);
        p.goal = Goal::Muscle;
        assert_eq!(daily_calories(&p), 2000);
    }

    #[test]
    fn protein_scales_with_goal() {
        let mut p = male_70kg();
        p.goal = Goal::Muscle;
        assert_eq!(daily_protein(&p), 140);
        p.goal = Goal::Loss;
        assert_eq!(daily_protein(&p), 112);
        p.goal = Goal::Maintenance;
        assert_eq!(daily_protein(&p), 126);
    }

    #[test]
    fn fats_are_27_percent_of_calories() {
        assert_eq!(daily_fats(2000), 60);
        assert_eq!(daily_fats(0), 0);
    }

    #[test]
    fn targets_use_overridden_calories_for_fats() {
        let mut p = male_70kg();
        p.calorie_goal = Some(1800);
        let t = targets(&p);
        assert_eq!(t.calories, 1800);
        assert_eq!(t.fats, daily_fats(1800));
    }

    #[test]
    fn validation_bounds() {
        let ok = male_70kg();
        assert_eq!(validate(&ok), Ok(()));

        let mut p = ok.clone();
        p.age = 4;
        assert_eq!(validate(&p), Err(ProfileError::InvalidAge));
        p.age = 101;
        assert_eq!(validate(&p), Err(ProfileError::InvalidAge));

        let mut p = ok.clone();
        p.height = 99.0;
        assert_eq!(validate(&p), Err(ProfileError::InvalidHeight));

        let mut p = ok.clone();
        p.weight = 301.0;
        assert_eq!(validate(&p), Err(ProfileError::InvalidWeight));

        let mut p = ok;
        p.sex = "  ".into();
        assert_eq!(validate(&p), Err(ProfileError::MissingSex));
    }

    #[test]
    fn bmi_and_label() {
        let p = male_70kg();
        assert_eq!(bmi(&p), 22.9);
        assert_eq!(bmi_label(22.9), "N");
        assert_eq!(bmi_label(17.0), "U");
        assert_eq!(bmi_label(27.0), "O");
        assert_eq!(bmi_label(31.0), "Ob");
    }
}
