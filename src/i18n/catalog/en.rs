// ABOUTME: English (en) UI message catalog for the health monitor
// ABOUTME: Static key/text pairs resolved by the i18n module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

pub(in crate::i18n) const ENTRIES: &[(&str, &str)] = &[
    // app
    ("app.title", "Health Monitor Assistant"),
    (
        "app.subtitle",
        "Get personalized daily nutrition recommendations based on your age, weight, and lifestyle",
    ),

    // form
    ("form.title", "Personal Information"),
    ("form.subtitle", "Enter your details to receive personalized nutrition recommendations"),
    ("form.age", "Age (years)"),
    ("form.age.placeholder", "Enter your age"),
    ("form.weight", "Weight (kg)"),
    ("form.weight.placeholder", "Enter your weight"),
    ("form.gender", "Gender"),
    ("form.gender.male", "Male"),
    ("form.gender.female", "Female"),
    ("form.activity", "Activity Level"),
    ("form.activity.sedentary", "Sedentary (little/no exercise)"),
    ("form.activity.light", "Light (light exercise 1-3 days/week)"),
    ("form.activity.moderate", "Moderate (moderate exercise 3-5 days/week)"),
    ("form.activity.active", "Active (hard exercise 6-7 days/week)"),
    ("form.activity.very-active", "Very Active (very hard exercise, physical job)"),
    ("form.calculate", "Calculate Recommendations"),
    ("form.language", "Language"),

    // results
    ("results.title", "Your Personalized Recommendations"),
    ("results.profile", "years old"),
    ("results.edit", "Edit Information"),
    ("results.calories", "Daily Calories"),
    ("results.calories.unit", "kcal/day"),
    ("results.protein", "Protein"),
    ("results.protein.unit", "grams/day"),
    ("results.carbs", "Carbohydrates"),
    ("results.carbs.unit", "grams/day"),
    ("results.fat", "Healthy Fats"),
    ("results.fat.unit", "grams/day"),
    ("results.fiber", "Fiber Intake"),
    ("results.fiber.desc", "Essential for digestive health and satiety"),
    ("results.water", "Water Intake"),
    ("results.water.desc", "Stay hydrated throughout the day"),
    ("results.sodium", "Sodium Limit"),
    ("results.sodium.desc", "Keep sodium intake below this limit"),

    // suggestions
    ("suggestions.title", "Personalized Suggestions"),
    ("suggestions.subtitle", "Tips to help you achieve your daily nutrition goals"),
    ("suggestions.1", "Drink water regularly throughout the day to stay hydrated"),
    ("suggestions.2", "Include lean proteins like chicken, fish, beans, and tofu in your meals"),
    ("suggestions.3", "Choose whole grains over refined carbohydrates for sustained energy"),
    ("suggestions.4", "Incorporate healthy fats from nuts, avocados, and olive oil"),
    ("suggestions.5", "Eat plenty of fruits and vegetables for fiber and micronutrients"),
    ("suggestions.6", "Limit processed foods and added sugars"),
    ("suggestions.7", "Consider meal prep to maintain consistent nutrition"),
];
