//! Rule-based dinner table used when the AI suggestion is unavailable or
//! comes back malformed.

pub struct IdeaRecord {
    pub name: &'static str,
    pub diet: &'static str,
    pub calories: i64,
    pub protein: i64,
    pub tags: &'static [&'static str],
    pub conditions: &'static [&'static str],
}

pub const DINNER_IDEAS: &[IdeaRecord] = &[
    IdeaRecord {
        name: "Paneer Bhurji + 1 Roti",
        diet: "veg",
        calories: 420,
        protein: 24,
        tags: &["high-protein"],
        conditions: &["none", "diabetes"],
    },
    IdeaRecord {
        name: "Vegetable Khichdi",
        diet: "veg",
        calories: 350,
        protein: 14,
        tags: &["light"],
        conditions: &["none", "diabetes"],
    },
    IdeaRecord {
        name: "Grilled Chicken + Salad",
        diet: "non-veg",
        calories: 450,
        protein: 35,
        tags: &["high-protein", "muscle"],
        conditions: &["none", "cholesterol"],
    },
    IdeaRecord {
        name: "Dal + Steamed Rice",
        diet: "veg",
        calories: 380,
        protein: 18,
        tags: &["balanced"],
        conditions: &["none"],
    },
    IdeaRecord {
        name: "Egg Bhurji + 2 Rotis",
        diet: "non-veg",
        calories: 430,
        protein: 26,
        tags: &["high-protein"],
        conditions: &["none", "diabetes"],
    },
    IdeaRecord {
        name: "Palak Paneer + Jowar Roti",
        diet: "veg",
        calories: 400,
        protein: 20,
        tags: &["balanced"],
        conditions: &["none", "diabetes", "cholesterol"],
    },
    IdeaRecord {
        name: "Fish Curry + 1 Roti",
        diet: "non-veg",
        calories: 380,
        protein: 28,
        tags: &["high-protein", "light"],
        conditions: &["none", "cholesterol"],
    },
    IdeaRecord {
        name: "Moong Dal Chilla",
        diet: "veg",
        calories: 280,
        protein: 16,
        tags: &["light"],
        conditions: &["none", "diabetes"],
    },
];
