// ABOUTME: Spanish (es) UI message catalog for the health monitor
// ABOUTME: Static key/text pairs resolved by the i18n module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

pub(in crate::i18n) const ENTRIES: &[(&str, &str)] = &[
    // app
    ("app.title", "Asistente Monitor de Salud"),
    (
        "app.subtitle",
        "Obtén recomendaciones nutricionales diarias personalizadas basadas en tu edad, peso y estilo de vida",
    ),

    // form
    ("form.title", "Información Personal"),
    (
        "form.subtitle",
        "Ingresa tus datos para recibir recomendaciones nutricionales personalizadas",
    ),
    ("form.age", "Edad (años)"),
    ("form.age.placeholder", "Ingresa tu edad"),
    ("form.weight", "Peso (kg)"),
    ("form.weight.placeholder", "Ingresa tu peso"),
    ("form.gender", "Género"),
    ("form.gender.male", "Masculino"),
    ("form.gender.female", "Femenino"),
    ("form.activity", "Nivel de Actividad"),
    ("form.activity.sedentary", "Sedentario (poco/sin ejercicio)"),
    ("form.activity.light", "Ligero (ejercicio ligero 1-3 días/semana)"),
    ("form.activity.moderate", "Moderado (ejercicio moderado 3-5 días/semana)"),
    ("form.activity.active", "Activo (ejercicio intenso 6-7 días/semana)"),
    ("form.activity.very-active", "Muy Activo (ejercicio muy intenso, trabajo físico)"),
    ("form.calculate", "Calcular Recomendaciones"),
    ("form.language", "Idioma"),

    // results
    ("results.title", "Tus Recomendaciones Personalizadas"),
    ("results.profile", "años"),
    ("results.edit", "Editar Información"),
    ("results.calories", "Calorías Diarias"),
    ("results.calories.unit", "kcal/día"),
    ("results.protein", "Proteína"),
    ("results.protein.unit", "gramos/día"),
    ("results.carbs", "Carbohidratos"),
    ("results.carbs.unit", "gramos/día"),
    ("results.fat", "Grasas Saludables"),
    ("results.fat.unit", "gramos/día"),
    ("results.fiber", "Ingesta de Fibra"),
    ("results.fiber.desc", "Esencial para la salud digestiva y saciedad"),
    ("results.water", "Ingesta de Agua"),
    ("results.water.desc", "Mantente hidratado durante el día"),
    ("results.sodium", "Límite de Sodio"),
    ("results.sodium.desc", "Mantén la ingesta de sodio por debajo de este límite"),

    // suggestions
    ("suggestions.title", "Sugerencias Personalizadas"),
    (
        "suggestions.subtitle",
        "Consejos para ayudarte a alcanzar tus objetivos nutricionales diarios",
    ),
    ("suggestions.1", "Bebe agua regularmente durante el día para mantenerte hidratado"),
    (
        "suggestions.2",
        "Incluye proteínas magras como pollo, pescado, frijoles y tofu en tus comidas",
    ),
    (
        "suggestions.3",
        "Elige granos integrales sobre carbohidratos refinados para energía sostenida",
    ),
    ("suggestions.4", "Incorpora grasas saludables de nueces, aguacates y aceite de oliva"),
    ("suggestions.5", "Come muchas frutas y verduras para fibra y micronutrientes"),
    ("suggestions.6", "Limita los alimentos procesados y azúcares añadidos"),
    (
        "suggestions.7",
        "Considera la preparación de comidas para mantener una nutrición consistente",
    ),
];
