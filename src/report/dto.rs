use serde::Deserialize;

use crate::profile::{NutritionTargets, UserProfile};

/// The dashboard posts its current profile and computed targets; either may
/// be omitted, in which case the server-side session state is used.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub nutrition: Option<NutritionTargets>,
}
