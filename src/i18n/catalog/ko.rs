// ABOUTME: Korean (ko) UI message catalog for the health monitor
// ABOUTME: Static key/text pairs resolved by the i18n module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Monitor Contributors

pub(in crate::i18n) const ENTRIES: &[(&str, &str)] = &[
    // app
    ("app.title", "건강 모니터 도우미"),
    ("app.subtitle", "나이, 체중, 생활 방식을 바탕으로 개인 맞춤형 일일 영양 권장사항을 받아보세요"),

    // form
    ("form.title", "개인 정보"),
    ("form.subtitle", "개인 맞춤형 영양 권장사항을 받기 위해 정보를 입력하세요"),
    ("form.age", "나이 (세)"),
    ("form.age.placeholder", "나이를 입력하세요"),
    ("form.weight", "체중 (kg)"),
    ("form.weight.placeholder", "체중을 입력하세요"),
    ("form.gender", "성별"),
    ("form.gender.male", "남성"),
    ("form.gender.female", "여성"),
    ("form.activity", "활동 수준"),
    ("form.activity.sedentary", "좌식 (운동 거의 안함)"),
    ("form.activity.light", "가벼움 (주 1-3일 가벼운 운동)"),
    ("form.activity.moderate", "보통 (주 3-5일 중간 운동)"),
    ("form.activity.active", "활발함 (주 6-7일 격렬한 운동)"),
    ("form.activity.very-active", "매우 활발함 (매우 격렬한 운동, 육체 노동)"),
    ("form.calculate", "권장사항 계산"),
    ("form.language", "언어"),

    // results
    ("results.title", "개인 맞춤형 권장사항"),
    ("results.profile", "세"),
    ("results.edit", "정보 수정"),
    ("results.calories", "일일 칼로리"),
    ("results.calories.unit", "kcal/일"),
    ("results.protein", "단백질"),
    ("results.protein.unit", "그램/일"),
    ("results.carbs", "탄수화물"),
    ("results.carbs.unit", "그램/일"),
    ("results.fat", "건강한 지방"),
    ("results.fat.unit", "그램/일"),
    ("results.fiber", "섬유질 섭취"),
    ("results.fiber.desc", "소화 건강과 포만감에 필수적"),
    ("results.water", "수분 섭취"),
    ("results.water.desc", "하루 종일 수분을 유지하세요"),
    ("results.sodium", "나트륨 제한"),
    ("results.sodium.desc", "나트륨 섭취량을 이 제한 이하로 유지하세요"),

    // suggestions
    ("suggestions.title", "개인 맞춤형 제안"),
    ("suggestions.subtitle", "일일 영양 목표 달성을 위한 팁"),
    ("suggestions.1", "수분 유지를 위해 하루 종일 정기적으로 물을 마시세요"),
    ("suggestions.2", "닭고기, 생선, 콩류, 두부와 같은 저지방 단백질을 식사에 포함하세요"),
    ("suggestions.3", "지속적인 에너지를 위해 정제된 탄수화물보다 통곡물을 선택하세요"),
    ("suggestions.4", "견과류, 아보카도, 올리브 오일에서 건강한 지방을 섭취하세요"),
    ("suggestions.5", "섬유질과 미량 영양소를 위해 과일과 채소를 많이 드세요"),
    ("suggestions.6", "가공식품과 첨가당을 제한하세요"),
    ("suggestions.7", "일관된 영양 섭취를 위해 식사 준비를 고려하세요"),
];
