// ABOUTME: Japanese (ja) UI message catalog for the health monitor
// ABOUTME: Static key/text pairs resolved by the i18n module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

pub(in crate::i18n) const ENTRIES: &[(&str, &str)] = &[
    // app
    ("app.title", "ヘルスモニターアシスタント"),
    ("app.subtitle", "年齢、体重、ライフスタイルに基づいてパーソナライズされた毎日の栄養推奨事項を取得"),

    // form
    ("form.title", "個人情報"),
    ("form.subtitle", "パーソナライズされた栄養推奨事項を受け取るために詳細を入力してください"),
    ("form.age", "年齢（歳）"),
    ("form.age.placeholder", "年齢を入力してください"),
    ("form.weight", "体重（kg）"),
    ("form.weight.placeholder", "体重を入力してください"),
    ("form.gender", "性別"),
    ("form.gender.male", "男性"),
    ("form.gender.female", "女性"),
    ("form.activity", "活動レベル"),
    ("form.activity.sedentary", "座りがち（運動なし/少ない）"),
    ("form.activity.light", "軽い（週1-3日軽い運動）"),
    ("form.activity.moderate", "中程度（週3-5日中程度の運動）"),
    ("form.activity.active", "アクティブ（週6-7日激しい運動）"),
    ("form.activity.very-active", "非常にアクティブ（非常に激しい運動、肉体労働）"),
    ("form.calculate", "推奨事項を計算"),
    ("form.language", "言語"),

    // results
    ("results.title", "あなたのパーソナライズされた推奨事項"),
    ("results.profile", "歳"),
    ("results.edit", "情報を編集"),
    ("results.calories", "毎日のカロリー"),
    ("results.calories.unit", "kcal/日"),
    ("results.protein", "タンパク質"),
    ("results.protein.unit", "グラム/日"),
    ("results.carbs", "炭水化物"),
    ("results.carbs.unit", "グラム/日"),
    ("results.fat", "健康的な脂肪"),
    ("results.fat.unit", "グラム/日"),
    ("results.fiber", "食物繊維摂取"),
    ("results.fiber.desc", "消化の健康と満腹感に不可欠"),
    ("results.water", "水分摂取"),
    ("results.water.desc", "一日中水分補給を保つ"),
    ("results.sodium", "ナトリウム制限"),
    ("results.sodium.desc", "ナトリウム摂取量をこの制限以下に保つ"),

    // suggestions
    ("suggestions.title", "パーソナライズされた提案"),
    ("suggestions.subtitle", "毎日の栄養目標達成のためのヒント"),
    ("suggestions.1", "水分補給のために一日中定期的に水を飲む"),
    ("suggestions.2", "鶏肉、魚、豆類、豆腐などの低脂肪タンパク質を食事に含める"),
    ("suggestions.3", "持続的なエネルギーのために精製炭水化物より全粒穀物を選ぶ"),
    ("suggestions.4", "ナッツ、アボカド、オリーブオイルから健康的な脂肪を摂取"),
    ("suggestions.5", "食物繊維と微量栄養素のために果物と野菜をたくさん食べる"),
    ("suggestions.6", "加工食品と添加糖を制限する"),
    ("suggestions.7", "一貫した栄養のために食事の準備を検討する"),
];
