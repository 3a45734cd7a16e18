//! Static nutrition table. Values are per one reference serving; grouped by
//! category for readability only; the catalog flattens everything at load.

use super::FoodRecord;

macro_rules! food {
    ($name:expr, [$($alias:expr),*], cal $cal:expr, p $protein:expr, f $fats:expr, fib $fiber:expr, $unit:expr, $category:expr) => {
        FoodRecord {
            name: $name,
            aliases: &[$($alias),*],
            calories: $cal,
            protein: $protein,
            fats: $fats,
            fiber: $fiber,
            unit: $unit,
            category: $category,
            image: None,
        }
    };
}

pub(super) const CARB_FOODS: &[FoodRecord] = &[
    food!("Rice (cooked)", ["rice", "white rice", "steamed rice"], cal 130.0, p 2.7, f 0.3, fib 0.4, "100g", "carbs"),
    food!("Roti", ["chapati", "phulka"], cal 120.0, p 3.5, f 0.4, fib 2.0, "piece", "carbs"),
    food!("Brown Rice (cooked)", ["brown rice"], cal 112.0, p 2.3, f 0.8, fib 1.8, "100g", "carbs"),
    food!("Jowar Roti", ["jowar", "sorghum roti"], cal 110.0, p 3.0, f 1.0, fib 2.6, "piece", "carbs"),
    food!("Bajra Roti", ["bajra", "pearl millet roti"], cal 115.0, p 3.2, f 1.2, fib 2.3, "piece", "carbs"),
    food!("Poha", ["flattened rice", "beaten rice"], cal 250.0, p 4.0, f 6.0, fib 1.5, "bowl", "carbs"),
    food!("Upma", ["rava upma"], cal 230.0, p 5.0, f 7.0, fib 2.0, "bowl", "carbs"),
    food!("Idli", ["rice idli"], cal 60.0, p 2.0, f 0.3, fib 0.5, "piece", "carbs"),
    food!("Dosa", ["plain dosa"], cal 170.0, p 3.5, f 6.0, fib 1.0, "piece", "carbs"),
    food!("Paratha", ["plain paratha"], cal 210.0, p 4.5, f 9.0, fib 2.2, "piece", "carbs"),
    food!("Bread", ["white bread", "bread slice", "toast"], cal 75.0, p 2.5, f 1.0, fib 0.7, "slice", "carbs"),
    food!("Oats (cooked)", ["oats", "oatmeal", "porridge"], cal 160.0, p 5.5, f 3.0, fib 4.0, "bowl", "carbs"),
    food!("Potato (boiled)", ["potato", "aloo"], cal 87.0, p 1.9, f 0.1, fib 1.8, "100g", "carbs"),
];

pub(super) const PROTEIN_FOODS: &[FoodRecord] = &[
    food!("Dal", ["lentils", "dal tadka", "toor dal"], cal 180.0, p 12.0, f 4.0, fib 6.0, "bowl", "protein"),
    food!("Rajma", ["kidney beans", "rajma curry"], cal 215.0, p 13.0, f 5.0, fib 9.0, "bowl", "protein"),
    food!("Chole", ["chickpeas", "chana masala", "chana"], cal 230.0, p 12.0, f 7.0, fib 8.0, "bowl", "protein"),
    food!("Paneer", ["cottage cheese"], cal 265.0, p 18.0, f 20.0, fib 0.0, "100g", "protein"),
    food!("Egg (boiled)", ["egg", "boiled egg"], cal 78.0, p 6.3, f 5.3, fib 0.0, "piece", "protein"),
    food!("Egg Bhurji", ["scrambled eggs", "anda bhurji"], cal 200.0, p 12.0, f 15.0, fib 0.5, "bowl", "protein"),
    food!("Chicken Curry", ["chicken"], cal 290.0, p 27.0, f 17.0, fib 1.0, "bowl", "protein"),
    food!("Grilled Chicken", ["chicken breast", "grilled chicken breast"], cal 165.0, p 31.0, f 3.6, fib 0.0, "100g", "protein"),
    food!("Fish Curry", ["fish"], cal 240.0, p 22.0, f 14.0, fib 0.8, "bowl", "protein"),
    food!("Curd", ["yogurt", "dahi"], cal 98.0, p 5.5, f 4.3, fib 0.0, "bowl", "protein"),
    food!("Tofu", ["soy paneer"], cal 76.0, p 8.0, f 4.8, fib 0.3, "100g", "protein"),
    food!("Soya Chunks (cooked)", ["soya", "soy chunks"], cal 150.0, p 22.0, f 0.5, fib 4.0, "bowl", "protein"),
    food!("Sprouts", ["moong sprouts", "sprout salad"], cal 110.0, p 8.0, f 0.6, fib 4.5, "bowl", "protein"),
];

pub(super) const SNACK_FOODS: &[FoodRecord] = &[
    food!("Samosa", ["aloo samosa"], cal 260.0, p 4.0, f 14.0, fib 2.0, "piece", "snacks"),
    food!("Pakora", ["bhajiya", "fritters"], cal 180.0, p 4.0, f 12.0, fib 1.5, "plate", "snacks"),
    food!("Biscuit", ["cookie", "marie biscuit"], cal 45.0, p 0.7, f 1.8, fib 0.2, "piece", "snacks"),
    food!("Namkeen", ["mixture", "sev"], cal 270.0, p 6.0, f 17.0, fib 1.5, "handful", "snacks"),
    food!("Banana", [], cal 105.0, p 1.3, f 0.4, fib 3.1, "piece", "snacks"),
    food!("Apple", [], cal 95.0, p 0.5, f 0.3, fib 4.4, "piece", "snacks"),
    food!("Orange", [], cal 62.0, p 1.2, f 0.2, fib 3.1, "piece", "snacks"),
    food!("Roasted Chana", ["roasted gram"], cal 120.0, p 6.0, f 2.0, fib 5.0, "handful", "snacks"),
    food!("Peanuts (roasted)", ["peanuts", "groundnuts"], cal 170.0, p 7.0, f 14.0, fib 2.4, "handful", "snacks"),
];

pub(super) const DRINK_FOODS: &[FoodRecord] = &[
    food!("Milk", ["toned milk"], cal 120.0, p 6.4, f 4.8, fib 0.0, "glass", "drinks"),
    food!("Buttermilk", ["chaas", "chhach"], cal 40.0, p 2.2, f 1.1, fib 0.0, "glass", "drinks"),
    food!("Tea (with milk)", ["chai", "tea"], cal 60.0, p 1.5, f 2.0, fib 0.0, "cup", "drinks"),
    food!("Black Coffee", ["coffee"], cal 5.0, p 0.3, f 0.0, fib 0.0, "cup", "drinks"),
    food!("Lassi", ["sweet lassi"], cal 180.0, p 5.0, f 5.0, fib 0.0, "glass", "drinks"),
    food!("Coconut Water", ["nariyal pani"], cal 45.0, p 1.7, f 0.5, fib 0.0, "glass", "drinks"),
];

pub(super) const FAT_FOODS: &[FoodRecord] = &[
    food!("Ghee", ["clarified butter"], cal 112.0, p 0.0, f 12.5, fib 0.0, "tbsp", "fats"),
    food!("Butter", [], cal 102.0, p 0.1, f 11.5, fib 0.0, "tbsp", "fats"),
    food!("Almonds", ["badam"], cal 70.0, p 2.6, f 6.1, fib 1.5, "handful", "fats"),
    food!("Walnuts", ["akhrot"], cal 90.0, p 2.1, f 9.0, fib 0.9, "handful", "fats"),
    food!("Coconut Chutney", ["chutney"], cal 110.0, p 1.5, f 10.0, fib 2.0, "bowl", "fats"),
];

pub(super) const MIXED_FOODS: &[FoodRecord] = &[
    food!("Vegetable Khichdi", ["khichdi"], cal 350.0, p 14.0, f 8.0, fib 6.0, "bowl", "mixed"),
    food!("Dal Rice", ["dal chawal"], cal 380.0, p 18.0, f 6.0, fib 7.0, "bowl", "mixed"),
    food!("Rajma Chawal", ["rajma rice"], cal 420.0, p 16.0, f 7.0, fib 9.0, "bowl", "mixed"),
    food!("Vegetable Biryani", ["veg biryani", "biryani"], cal 450.0, p 10.0, f 14.0, fib 4.0, "bowl", "mixed"),
    food!("Paneer Bhurji", ["bhurji"], cal 320.0, p 18.0, f 24.0, fib 1.5, "bowl", "mixed"),
    food!("Mixed Vegetable Sabzi", ["sabzi", "vegetable curry", "mixed veg"], cal 150.0, p 4.0, f 8.0, fib 4.0, "bowl", "mixed"),
    food!("Palak Paneer", ["spinach paneer"], cal 280.0, p 14.0, f 20.0, fib 4.0, "bowl", "mixed"),
    food!("Aloo Gobi", ["potato cauliflower"], cal 190.0, p 4.5, f 9.0, fib 4.5, "bowl", "mixed"),
    food!("Vegetable Pulao", ["pulao", "pilaf"], cal 340.0, p 7.0, f 10.0, fib 3.0, "bowl", "mixed"),
    food!("Salad", ["green salad", "kachumber"], cal 60.0, p 2.0, f 0.5, fib 3.0, "bowl", "mixed"),
];
