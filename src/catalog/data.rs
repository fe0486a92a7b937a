//! Built-in reference data. Stands in for a remote food database until one
//! is wired up behind the engine.

use uuid::Uuid;

use super::types::{FoodItem, Meal, MealTemplate, MealType};

#[allow(clippy::too_many_arguments)]
fn food(
    name: &str,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    fiber_g: f64,
    sugar_g: f64,
    serving_size: &str,
    category: &str,
    image_url: &str,
) -> FoodItem {
    FoodItem {
        id: Uuid::new_v4(),
        name: name.into(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
        sugar_g,
        serving_size: serving_size.into(),
        category: category.into(),
        image_url: Some(image_url.into()),
    }
}

pub fn builtin_foods() -> Vec<FoodItem> {
    vec![
        food(
            "Apple", 95.0, 0.5, 25.0, 0.3, 4.4, 19.0,
            "1 medium (182g)", "Fruits",
            "https://images.pexels.com/photos/102104/pexels-photo-102104.jpeg?auto=compress&cs=tinysrgb&w=300",
        ),
        food(
            "Chicken Breast", 165.0, 31.0, 0.0, 3.6, 0.0, 0.0,
            "100g, cooked", "Protein",
            "https://images.pexels.com/photos/616354/pexels-photo-616354.jpeg?auto=compress&cs=tinysrgb&w=300",
        ),
        food(
            "Biryani", 400.0, 15.0, 45.0, 18.0, 3.0, 2.0,
            "1 cup (250g)", "Main Dishes",
            "https://images.pexels.com/photos/7394819/pexels-photo-7394819.jpeg?auto=compress&cs=tinysrgb&w=300",
        ),
        food(
            "Salmon Fillet", 208.0, 22.0, 0.0, 13.0, 0.0, 0.0,
            "100g", "Protein",
            "https://images.pexels.com/photos/3296280/pexels-photo-3296280.jpeg?auto=compress&cs=tinysrgb&w=300",
        ),
        food(
            "Quinoa", 120.0, 4.4, 21.3, 1.9, 2.8, 0.9,
            "100g, cooked", "Grains",
            "https://images.pexels.com/photos/7421213/pexels-photo-7421213.jpeg?auto=compress&cs=tinysrgb&w=300",
        ),
        food(
            "Shawarma", 380.0, 24.0, 28.0, 20.0, 4.0, 3.0,
            "1 regular wrap (250g)", "Main Dishes",
            "https://images.pexels.com/photos/6697455/pexels-photo-6697455.jpeg?auto=compress&cs=tinysrgb&w=300",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn template(
    name: &str,
    description: &str,
    meal_type: MealType,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    ingredients: &[&str],
    image_url: &str,
    preparation: &str,
    cuisines: &[&str],
) -> MealTemplate {
    MealTemplate {
        meal: Meal {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            meal_type,
            calories,
            protein_g,
            carbs_g,
            fat_g,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            image_url: image_url.into(),
            preparation: preparation.into(),
        },
        cuisines: cuisines.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn builtin_templates() -> Vec<MealTemplate> {
    vec![
        template(
            "Greek Yogurt Parfait",
            "Creamy yogurt with fresh berries and honey",
            MealType::Breakfast,
            320.0, 18.0, 42.0, 8.0,
            &["Greek yogurt", "Mixed berries", "Honey", "Granola"],
            "https://images.pexels.com/photos/1435706/pexels-photo-1435706.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Layer yogurt, berries, and granola in a glass. Drizzle with honey.",
            &["mediterranean"],
        ),
        template(
            "Veggie Omelette",
            "Fluffy eggs folded over spinach, tomato, and feta",
            MealType::Breakfast,
            310.0, 21.0, 8.0, 22.0,
            &["Eggs", "Spinach", "Cherry tomatoes", "Feta cheese", "Olive oil"],
            "https://images.pexels.com/photos/824635/pexels-photo-824635.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Whisk eggs, pour into a hot oiled pan, add vegetables and feta, fold and serve.",
            &["french"],
        ),
        template(
            "Mediterranean Chickpea Salad",
            "Refreshing salad with chickpeas, vegetables, and feta",
            MealType::Lunch,
            420.0, 15.0, 52.0, 18.0,
            &[
                "Chickpeas", "Cucumber", "Cherry tomatoes", "Red onion",
                "Feta cheese", "Olive oil", "Lemon juice",
            ],
            "https://images.pexels.com/photos/1213710/pexels-photo-1213710.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Combine all ingredients in a bowl and toss with olive oil and lemon juice.",
            &["mediterranean"],
        ),
        template(
            "Chicken Teriyaki Bowl",
            "Grilled chicken over rice with steamed broccoli",
            MealType::Lunch,
            510.0, 35.0, 62.0, 12.0,
            &["Chicken breast", "Rice", "Broccoli", "Teriyaki sauce", "Sesame seeds"],
            "https://images.pexels.com/photos/2092906/pexels-photo-2092906.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Grill the chicken, steam the broccoli, and serve over rice with teriyaki sauce.",
            &["asian"],
        ),
        template(
            "Grilled Salmon with Asparagus",
            "Omega-rich salmon with roasted asparagus",
            MealType::Dinner,
            520.0, 40.0, 12.0, 32.0,
            &["Salmon fillet", "Asparagus", "Lemon", "Olive oil", "Garlic", "Dill"],
            "https://images.pexels.com/photos/3655916/pexels-photo-3655916.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Season salmon and asparagus with olive oil, garlic, and herbs. Grill salmon and roast asparagus at 400\u{b0}F for 12 minutes.",
            &["mediterranean"],
        ),
        template(
            "Trail Mix",
            "Crunchy nut and fruit mix for the afternoon dip",
            MealType::Snack,
            290.0, 9.0, 26.0, 18.0,
            &["Peanuts", "Almonds", "Raisins", "Dark chocolate chips"],
            "https://images.pexels.com/photos/1295572/pexels-photo-1295572.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Toss everything together and portion into small containers.",
            &[],
        ),
        template(
            "Hummus with Carrot Sticks",
            "Smooth hummus with fresh-cut vegetables",
            MealType::Snack,
            180.0, 6.0, 20.0, 9.0,
            &["Hummus", "Carrots", "Olive oil", "Paprika"],
            "https://images.pexels.com/photos/1618898/pexels-photo-1618898.jpeg?auto=compress&cs=tinysrgb&w=600",
            "Peel and cut the carrots, top the hummus with olive oil and paprika.",
            &["mediterranean"],
        ),
    ]
}
