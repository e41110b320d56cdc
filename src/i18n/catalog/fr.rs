// ABOUTME: French (fr) UI message catalog for the health monitor
// ABOUTME: Static key/text pairs resolved by the i18n module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

pub(in crate::i18n) const ENTRIES: &[(&str, &str)] = &[
    // app
    ("app.title", "Assistant Moniteur de Santé"),
    (
        "app.subtitle",
        "Obtenez des recommandations nutritionnelles quotidiennes personnalisées basées sur votre âge, poids et style de vie",
    ),

    // form
    ("form.title", "Informations Personnelles"),
    (
        "form.subtitle",
        "Entrez vos détails pour recevoir des recommandations nutritionnelles personnalisées",
    ),
    ("form.age", "Âge (années)"),
    ("form.age.placeholder", "Entrez votre âge"),
    ("form.weight", "Poids (kg)"),
    ("form.weight.placeholder", "Entrez votre poids"),
    ("form.gender", "Genre"),
    ("form.gender.male", "Masculin"),
    ("form.gender.female", "Féminin"),
    ("form.activity", "Niveau d'Activité"),
    ("form.activity.sedentary", "Sédentaire (peu/pas d'exercice)"),
    ("form.activity.light", "Léger (exercice léger 1-3 jours/semaine)"),
    ("form.activity.moderate", "Modéré (exercice modéré 3-5 jours/semaine)"),
    ("form.activity.active", "Actif (exercice intense 6-7 jours/semaine)"),
    ("form.activity.very-active", "Très Actif (exercice très intense, travail physique)"),
    ("form.calculate", "Calculer les Recommandations"),
    ("form.language", "Langue"),

    // results
    ("results.title", "Vos Recommandations Personnalisées"),
    ("results.profile", "ans"),
    ("results.edit", "Modifier les Informations"),
    ("results.calories", "Calories Quotidiennes"),
    ("results.calories.unit", "kcal/jour"),
    ("results.protein", "Protéines"),
    ("results.protein.unit", "grammes/jour"),
    ("results.carbs", "Glucides"),
    ("results.carbs.unit", "grammes/jour"),
    ("results.fat", "Graisses Saines"),
    ("results.fat.unit", "grammes/jour"),
    ("results.fiber", "Apport en Fibres"),
    ("results.fiber.desc", "Essentiel pour la santé digestive et la satiété"),
    ("results.water", "Apport en Eau"),
    ("results.water.desc", "Restez hydraté tout au long de la journée"),
    ("results.sodium", "Limite de Sodium"),
    ("results.sodium.desc", "Maintenez l'apport en sodium en dessous de cette limite"),

    // suggestions
    ("suggestions.title", "Suggestions Personnalisées"),
    (
        "suggestions.subtitle",
        "Conseils pour vous aider à atteindre vos objectifs nutritionnels quotidiens",
    ),
    (
        "suggestions.1",
        "Buvez de l'eau régulièrement tout au long de la journée pour rester hydraté",
    ),
    (
        "suggestions.2",
        "Incluez des protéines maigres comme le poulet, le poisson, les haricots et le tofu dans vos repas",
    ),
    (
        "suggestions.3",
        "Choisissez des grains entiers plutôt que des glucides raffinés pour une énergie soutenue",
    ),
    (
        "suggestions.4",
        "Incorporez des graisses saines provenant de noix, d'avocats et d'huile d'olive",
    ),
    ("suggestions.5", "Mangez beaucoup de fruits et légumes pour les fibres et micronutriments"),
    ("suggestions.6", "Limitez les aliments transformés et les sucres ajoutés"),
    ("suggestions.7", "Considérez la préparation de repas pour maintenir une nutrition cohérente"),
];
