// ABOUTME: Simplified Chinese (zh) UI message catalog for the health monitor
// ABOUTME: Static key/text pairs resolved by the i18n module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

pub(in crate::i18n) const ENTRIES: &[(&str, &str)] = &[
    // app
    ("app.title", "健康监测助手"),
    ("app.subtitle", "根据您的年龄、体重和生活方式获得个性化的每日营养建议"),

    // form
    ("form.title", "个人信息"),
    ("form.subtitle", "输入您的详细信息以获得个性化营养建议"),
    ("form.age", "年龄（岁）"),
    ("form.age.placeholder", "请输入您的年龄"),
    ("form.weight", "体重（公斤）"),
    ("form.weight.placeholder", "请输入您的体重"),
    ("form.gender", "性别"),
    ("form.gender.male", "男性"),
    ("form.gender.female", "女性"),
    ("form.activity", "活动水平"),
    ("form.activity.sedentary", "久坐（很少/不运动）"),
    ("form.activity.light", "轻度（轻度运动1-3天/周）"),
    ("form.activity.moderate", "中度（中度运动3-5天/周）"),
    ("form.activity.active", "活跃（高强度运动6-7天/周）"),
    ("form.activity.very-active", "非常活跃（高强度运动，体力工作）"),
    ("form.calculate", "计算建议"),
    ("form.language", "语言"),

    // results
    ("results.title", "您的个性化建议"),
    ("results.profile", "岁"),
    ("results.edit", "编辑信息"),
    ("results.calories", "每日卡路里"),
    ("results.calories.unit", "千卡/天"),
    ("results.protein", "蛋白质"),
    ("results.protein.unit", "克/天"),
    ("results.carbs", "碳水化合物"),
    ("results.carbs.unit", "克/天"),
    ("results.fat", "健康脂肪"),
    ("results.fat.unit", "克/天"),
    ("results.fiber", "纤维摄入"),
    ("results.fiber.desc", "对消化健康和饱腹感至关重要"),
    ("results.water", "水分摄入"),
    ("results.water.desc", "全天保持水分充足"),
    ("results.sodium", "钠限制"),
    ("results.sodium.desc", "将钠摄入量保持在此限制以下"),

    // suggestions
    ("suggestions.title", "个性化建议"),
    ("suggestions.subtitle", "帮助您实现每日营养目标的提示"),
    ("suggestions.1", "全天定期饮水以保持水分充足"),
    ("suggestions.2", "在餐食中包含瘦蛋白，如鸡肉、鱼类、豆类和豆腐"),
    ("suggestions.3", "选择全谷物而非精制碳水化合物以获得持续能量"),
    ("suggestions.4", "从坚果、牛油果和橄榄油中摄入健康脂肪"),
    ("suggestions.5", "多吃水果和蔬菜以获得纤维和微量营养素"),
    ("suggestions.6", "限制加工食品和添加糖"),
    ("suggestions.7", "考虑备餐以保持营养的一致性"),
];
