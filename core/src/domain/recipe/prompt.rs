use crate::domain::recipe::value_objects::GenerateRecipesInput;

pub const RECIPE_COUNT: usize = 3;

pub fn system_prompt() -> String {
    format!(
        r#"あなたは麹調味料に詳しい料理アドバイザーです。
お客様の体調やお悩みに合わせて、健康的で美味しいレシピを{RECIPE_COUNT}つ提案してください。
材料の分量はグラム換算の数値で amount に入れてください。

レスポンスは必ず以下のJSON形式で返してください：
{{
  "recipes": [
    {{
      "name": "レシピ名",
      "ingredients": [{{"item": "材料名", "amount": 100, "unit": "g"}}],
      "steps": [{{"step_number": 1, "description": "手順"}}],
      "benefit": "このレシピの健康効果の説明"
    }}
  ]
}}"#
    )
}

/// Only the fields the shopper filled in are mentioned.
pub fn user_message(input: &GenerateRecipesInput) -> String {
    let mut lines = vec![
        "【お客様の情報】".to_string(),
        format!("- 体調・お悩み: {}", input.condition.trim()),
    ];

    let optional = [
        ("具体的なニーズ", &input.needs),
        ("麹の種類", &input.koji_type),
        ("その他の材料", &input.other_ingredients),
    ];
    for (label, value) in optional {
        if let Some(value) = value.as_deref().map(str::trim)
            && !value.is_empty()
        {
            lines.push(format!("- {label}: {value}"));
        }
    }

    lines.push(String::new());
    lines.push(format!("この情報を基に、{RECIPE_COUNT}つのレシピを提案してください。"));
    lines.join("\n")
}
