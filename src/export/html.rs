//! HTMLレポート生成
//!
//! 外部リソースを参照しない単一ファイル。表の行だけを差し込む固定テンプレート。
//! 摘要セルは照合時にエスケープ・ハイライト済みなのでそのまま埋め込み、
//! それ以外のセルはここでエスケープする。
//!
//! ページ送りは「1」ページ目のボタンを表示するだけ（未実装）。

use material_match_common::{escape_html, MatchRow, ResultTable, Summary, HIGHLIGHT_CLASS};

const TITLE: &str = "材料照合結果";

/// 表の見出し（表示用）
const COLUMN_LABELS: [&str; 5] = ["順序", "材料", "取引先", "金額", "摘要"];

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; }
        .header { text-align: center; margin-bottom: 20px; }
        .stats { font-size: 16px; color: #666; margin-bottom: 10px; }
        .filter { margin-bottom: 20px; }
        .filter input { padding: 8px; border: 1px solid #ddd; border-radius: 4px; }
        .filter button { padding: 8px 15px; background-color: #4CAF50; color: white; border: none; border-radius: 4px; cursor: pointer; }
        .filter button:hover { background-color: #45a049; }
        table { width: 100%; border-collapse: collapse; }
        th, td { padding: 10px; border: 1px solid #ddd; text-align: left; }
        th { background-color: #f2f2f2; font-weight: bold; }
        tr:nth-child(even) { background-color: #f9f9f9; }
        tr:hover { background-color: #f5f5f5; }
        .pagination { margin-top: 20px; text-align: center; }
        .pagination button { padding: 5px 10px; margin: 0 2px; border: 1px solid #ddd; border-radius: 4px; cursor: pointer; }
        .pagination button.active { background-color: #4CAF50; color: white; }
"#;

// 材料列（2列目）に入力文字列を含む行だけ表示する
const SCRIPT: &str = r#"
        function searchTable() {
            var filter = document.getElementById("searchInput").value.toUpperCase();
            var rows = document.querySelectorAll(".result-table tbody tr");
            for (var i = 0; i < rows.length; i++) {
                var td = rows[i].getElementsByTagName("td")[1];
                if (!td) continue;
                var text = td.textContent || td.innerText;
                rows[i].style.display = text.toUpperCase().indexOf(filter) > -1 ? "" : "none";
            }
        }

        function setupPagination() {
            var pagination = document.getElementById("pagination");
            pagination.innerHTML = '<button class="active">1</button>';
        }

        window.onload = function() {
            document.getElementById("searchInput").addEventListener("input", searchTable);
            setupPagination();
        };
"#;

/// 照合結果をHTML文書にする
pub fn render_html(table: &ResultTable) -> String {
    let mut html = String::with_capacity(4096 + table.len() * 256);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("    <title>{}</title>\n", TITLE));
    html.push_str("    <style>");
    html.push_str(STYLE);
    html.push_str(&format!(
        "        .{} {{ background-color: #FFFF00; font-weight: bold; }}\n",
        HIGHLIGHT_CLASS
    ));
    html.push_str("    </style>\n</head>\n<body>\n");

    html.push_str("    <div class=\"header\">\n");
    html.push_str(&format!("        <h1>{}</h1>\n", TITLE));
    html.push_str(&format!(
        "        <div class=\"stats\">一致 {} 件</div>\n",
        table.len()
    ));
    html.push_str("    </div>\n\n");

    html.push_str("    <div class=\"filter\">\n");
    html.push_str("        <input type=\"text\" id=\"searchInput\" placeholder=\"材料で絞り込み...\">\n");
    html.push_str("        <button onclick=\"searchTable()\">検索</button>\n");
    html.push_str("    </div>\n\n");

    render_table(&mut html, table.rows());

    html.push_str("\n    <div class=\"pagination\" id=\"pagination\"></div>\n\n");
    html.push_str("    <script>");
    html.push_str(SCRIPT);
    html.push_str("    </script>\n</body>\n</html>\n");

    html
}

fn render_table(html: &mut String, rows: &[MatchRow]) {
    html.push_str("    <table class=\"result-table\">\n      <thead>\n        <tr>");
    for label in COLUMN_LABELS {
        html.push_str(&format!("<th>{}</th>", label));
    }
    html.push_str("</tr>\n      </thead>\n      <tbody>\n");

    for row in rows {
        html.push_str("        <tr>");
        html.push_str(&format!("<td>{}</td>", row.order));
        html.push_str(&format!("<td>{}</td>", escape_html(&row.material)));
        html.push_str(&format!("<td>{}</td>", escape_html(&row.counterparty)));
        html.push_str(&format!("<td>{}</td>", escape_html(&row.amount.to_string())));
        html.push_str(&format!("<td>{}</td>", summary_cell(&row.summary)));
        html.push_str("</tr>\n");
    }

    html.push_str("      </tbody>\n    </table>\n");
}

fn summary_cell(summary: &Summary) -> String {
    match summary {
        Summary::Highlighted(markup) => markup.clone(),
        Summary::Plain(text) => escape_html(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use material_match_common::{build_table, Cell};

    fn table() -> ResultTable {
        build_table(vec![MatchRow {
            order: 1,
            material: "<钢板>".into(),
            counterparty: "甲&乙".into(),
            amount: Cell::Number(1500.0),
            summary: Summary::Highlighted(
                "采购<span class=\"highlight\">钢板</span>一批".into(),
            ),
        }])
        .unwrap()
    }

    #[test]
    fn test_render_html_structure() {
        let html = render_html(&table());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("一致 1 件"));
        assert!(html.contains("id=\"searchInput\""));
        assert!(html.contains("class=\"result-table\""));
        assert!(html.contains("id=\"pagination\""));
        assert!(html.contains(".highlight {"));
        assert!(!html.contains("http://") && !html.contains("https://"));
    }

    #[test]
    fn test_render_html_escapes_cells_but_keeps_highlight() {
        let html = render_html(&table());
        assert!(html.contains("<td>&lt;钢板&gt;</td>"));
        assert!(html.contains("<td>甲&amp;乙</td>"));
        assert!(html.contains("<td>1500</td>"));
        assert!(html.contains("<td>采购<span class=\"highlight\">钢板</span>一批</td>"));
    }

    #[test]
    fn test_plain_summary_is_escaped() {
        assert_eq!(summary_cell(&Summary::Plain("a<b".into())), "a&lt;b");
    }

    #[test]
    fn test_render_html_is_deterministic() {
        assert_eq!(render_html(&table()), render_html(&table()));
    }
}
