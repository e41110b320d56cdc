// ABOUTME: German (de) UI message catalog for the health monitor
// ABOUTME: Static key/text pairs resolved by the i18n module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

pub(in crate::i18n) const ENTRIES: &[(&str, &str)] = &[
    // app
    ("app.title", "Gesundheitsmonitor-Assistent"),
    (
        "app.subtitle",
        "Erhalten Sie personalisierte tägliche Ernährungsempfehlungen basierend auf Ihrem Alter, Gewicht und Lebensstil",
    ),

    // form
    ("form.title", "Persönliche Informationen"),
    (
        "form.subtitle",
        "Geben Sie Ihre Daten ein, um personalisierte Ernährungsempfehlungen zu erhalten",
    ),
    ("form.age", "Alter (Jahre)"),
    ("form.age.placeholder", "Geben Sie Ihr Alter ein"),
    ("form.weight", "Gewicht (kg)"),
    ("form.weight.placeholder", "Geben Sie Ihr Gewicht ein"),
    ("form.gender", "Geschlecht"),
    ("form.gender.male", "Männlich"),
    ("form.gender.female", "Weiblich"),
    ("form.activity", "Aktivitätslevel"),
    ("form.activity.sedentary", "Sitzend (wenig/kein Sport)"),
    ("form.activity.light", "Leicht (leichter Sport 1-3 Tage/Woche)"),
    ("form.activity.moderate", "Mäßig (mäßiger Sport 3-5 Tage/Woche)"),
    ("form.activity.active", "Aktiv (intensiver Sport 6-7 Tage/Woche)"),
    ("form.activity.very-active", "Sehr Aktiv (sehr intensiver Sport, körperliche Arbeit)"),
    ("form.calculate", "Empfehlungen Berechnen"),
    ("form.language", "Sprache"),

    // results
    ("results.title", "Ihre Personalisierten Empfehlungen"),
    ("results.profile", "Jahre alt"),
    ("results.edit", "Informationen Bearbeiten"),
    ("results.calories", "Tägliche Kalorien"),
    ("results.calories.unit", "kcal/Tag"),
    ("results.protein", "Protein"),
    ("results.protein.unit", "Gramm/Tag"),
    ("results.carbs", "Kohlenhydrate"),
    ("results.carbs.unit", "Gramm/Tag"),
    ("results.fat", "Gesunde Fette"),
    ("results.fat.unit", "Gramm/Tag"),
    ("results.fiber", "Ballaststoffaufnahme"),
    ("results.fiber.desc", "Wichtig für die Verdauungsgesundheit und Sättigung"),
    ("results.water", "Wasseraufnahme"),
    ("results.water.desc", "Bleiben Sie den ganzen Tag über hydratisiert"),
    ("results.sodium", "Natriumgrenze"),
    ("results.sodium.desc", "Halten Sie die Natriumaufnahme unter dieser Grenze"),

    // suggestions
    ("suggestions.title", "Personalisierte Vorschläge"),
    ("suggestions.subtitle", "Tipps, um Ihre täglichen Ernährungsziele zu erreichen"),
    (
        "suggestions.1",
        "Trinken Sie regelmäßig Wasser über den Tag verteilt, um hydratisiert zu bleiben",
    ),
    (
        "suggestions.2",
        "Nehmen Sie magere Proteine wie Huhn, Fisch, Bohnen und Tofu in Ihre Mahlzeiten auf",
    ),
    (
        "suggestions.3",
        "Wählen Sie Vollkornprodukte statt raffinierte Kohlenhydrate für nachhaltige Energie",
    ),
    ("suggestions.4", "Integrieren Sie gesunde Fette aus Nüssen, Avocados und Olivenöl"),
    ("suggestions.5", "Essen Sie viel Obst und Gemüse für Ballaststoffe und Mikronährstoffe"),
    ("suggestions.6", "Begrenzen Sie verarbeitete Lebensmittel und zugesetzten Zucker"),
    ("suggestions.7", "Erwägen Sie Meal Prep für eine konsistente Ernährung"),
];
