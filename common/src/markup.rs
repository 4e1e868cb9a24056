//! HTML向けの文字列処理

use regex::Regex;

/// ハイライト用のCSSクラス名
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// HTML特殊文字をエスケープ
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `pattern`に一致した箇所を`<span class="highlight">`で囲む
///
/// 一致箇所・それ以外ともにエスケープしてから組み立てるので、
/// 戻り値はそのままHTMLに埋め込める。一致部分の大文字小文字は元のまま。
pub fn highlight(text: &str, pattern: &Regex) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    let mut last = 0;

    for m in pattern.find_iter(text) {
        if m.start() == m.end() {
            continue;
        }
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str("<span class=\"");
        out.push_str(HIGHLIGHT_CLASS);
        out.push_str("\">");
        out.push_str(&escape_html(m.as_str()));
        out.push_str("</span>");
        last = m.end();
    }
    out.push_str(&escape_html(&text[last..]));

    out
}
