//! Prompt construction for the categorization model.

use crate::categories::WorkedExample;

/// Build the classification prompt over `(index, description)` pairs.
/// The model is asked for a bare JSON array of `{id, name, category}`
/// objects so the reply can be validated strictly.
pub fn build_prompt(
    items: &[(usize, &str)],
    categories: &[String],
    examples: &[WorkedExample],
) -> String {
    let mut prompt = String::new();
    prompt.push_str("クレジットカードの明細をカテゴリ分けします。以下の明細をカテゴリ分けしてください。\n");
    prompt.push_str("カテゴリ一覧:\n");
    for category in categories {
        prompt.push_str(&format!("- {category}\n"));
    }
    prompt.push('\n');
    if !examples.is_empty() {
        prompt.push_str("カテゴリ分け例 (明細: カテゴリ):\n");
        for example in examples {
            prompt.push_str(&format!("- {}: {}\n", example.description, example.category));
        }
        prompt.push('\n');
    }
    prompt.push_str("カテゴリ分け対象の明細一覧:\n");
    for (id, description) in items {
        prompt.push_str(&format!("{id}: {description}\n"));
    }
    prompt.push('\n');
    prompt.push_str("結果は次の形式のJSON配列だけを出力してください。説明文は不要です。\n");
    prompt.push_str("[{\"id\": 0, \"name\": \"明細\", \"category\": \"カテゴリ\"}, ...]\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::default_categories;

    #[test]
    fn test_prompt_lists_categories_and_items() {
        let items = vec![(0, "スーパー"), (1, "タクシー")];
        let prompt = build_prompt(&items, &default_categories(), &[]);
        assert!(prompt.contains("- 00食料品・日用品"));
        assert!(prompt.contains("- 99その他"));
        assert!(prompt.contains("0: スーパー"));
        assert!(prompt.contains("1: タクシー"));
        assert!(!prompt.contains("カテゴリ分け例"));
    }

    #[test]
    fn test_prompt_includes_worked_examples() {
        let examples = vec![WorkedExample::new("コンビニ", "00食料品・日用品")];
        let prompt = build_prompt(&[(0, "x")], &default_categories(), &examples);
        assert!(prompt.contains("- コンビニ: 00食料品・日用品"));
    }
}
