use crate::model::{Category, SummaryRow};

use super::escape_html;

/// Summary table markup. Row color classes are driven entirely by the
/// category the pipeline attached; no classification happens here.
pub fn summary_table(rows: &[SummaryRow]) -> String {
    let mut html = String::new();
    html.push_str("<table class=\"table-style\">\n");
    html.push_str("    <thead>\n        <tr><th>Label</th><th>QQQ</th><th>NQ</th></tr>\n    </thead>\n");
    html.push_str("    <tbody>\n");

    for row in rows {
        html.push_str(&format!(
            "        <tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row_class(row.category),
            escape_html(&row.label),
            row.qqq,
            row.nq,
        ));
    }

    html.push_str("    </tbody>\n</table>\n");
    html
}

fn row_class(category: Category) -> &'static str {
    match category {
        Category::Bullish => "green-text",
        Category::Bearish => "red-text",
        Category::Highlight => "purple-text",
        Category::None => "",
    }
}
