use noasacrypto_api::types::{Category, ReasonResult};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

#[derive(Tabled)]
struct ReasonRow {
    #[tabled(rename = "")]
    emoji: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Id")]
    id: String,
}

// -- Row builders --

fn build_reason_row(reason: &ReasonResult) -> ReasonRow {
    ReasonRow {
        emoji: reason.emoji.clone(),
        category: format!("{} ({})", reason.category, reason.category_id),
        reason: reason.reason.clone(),
    }
}

fn build_category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            id: c.to_string(),
        })
        .collect()
}

fn render_table<T: Tabled>(rows: Vec<T>, format: &OutputFormat) -> String {
    let mut table = Table::new(rows);
    if let OutputFormat::Markdown = format {
        table.with(Style::markdown());
    }
    table.to_string()
}

// -- Printers --

pub fn print_reason(reason: &ReasonResult, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(reason),
        _ => println!("{}", render_table(vec![build_reason_row(reason)], format)),
    }
}

pub fn print_categories(categories: &[Category], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&categories),
        _ => println!("{}", render_table(build_category_rows(categories), format)),
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reason() -> ReasonResult {
        ReasonResult {
            reason: "Their smart contract has more backdoors than a Pentagon server".to_string(),
            category: "Rug Check".to_string(),
            category_id: "rug-check".to_string(),
            emoji: "🚩".to_string(),
        }
    }

    #[test]
    fn reason_row_combines_label_and_id() {
        let row = build_reason_row(&sample_reason());
        assert_eq!(row.category, "Rug Check (rug-check)");
        assert_eq!(row.emoji, "🚩");
    }

    #[test]
    fn table_contains_reason_text() {
        let rendered = render_table(vec![build_reason_row(&sample_reason())], &OutputFormat::Table);
        assert!(rendered.contains("Pentagon server"));
        assert!(rendered.contains("Category"));
    }

    #[test]
    fn markdown_uses_pipe_rows() {
        let rendered = render_table(build_category_rows(&Category::ALL), &OutputFormat::Markdown);
        assert!(rendered.contains("| rug-check"));
        assert_eq!(rendered.lines().count(), Category::ALL.len() + 2);
    }

    #[test]
    fn category_rows_follow_vocabulary_order() {
        let rows = build_category_rows(&Category::ALL);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].id, "rug-check");
        assert_eq!(rows[11].id, "scam-detector");
    }

    #[test]
    fn reason_json_keeps_api_field_names() {
        let value = serde_json::to_value(sample_reason()).unwrap();
        assert_eq!(value["categoryId"], "rug-check");
        assert_eq!(value["emoji"], "🚩");
    }
}
