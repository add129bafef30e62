//! トレーニング計画の軽量マークアップ描画
//!
//! バックエンド生成テキストをHTMLに変換する箇所は信頼境界になる。
//! サニタイズの有無は`MarkupPolicy`で呼び出し側が明示的に選ぶ。

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// 生HTMLの扱い
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkupPolicy {
    /// バックエンドの出力を信頼し、生HTMLをそのまま通す
    TrustBackend,
    /// 生HTMLをエスケープしてテキストとして表示する
    EscapeHtml,
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// マークアップをHTMLに変換
pub fn render_markup_html(source: &str, policy: MarkupPolicy) -> String {
    let parser = Parser::new_ext(source, options()).map(|event| match (policy, event) {
        (MarkupPolicy::EscapeHtml, Event::Html(raw)) | (MarkupPolicy::EscapeHtml, Event::InlineHtml(raw)) => {
            Event::Text(raw)
        }
        (_, event) => event,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// マークアップを端末向けのプレーンテキストに変換
///
/// 見出しは1行、リスト項目は「•」または番号付き、リンクはURLを括弧で併記する。
pub fn render_markup_plain(source: &str) -> String {
    let mut out = String::new();
    // リストごとの次の番号（箇条書きはNone）
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut link_urls: Vec<String> = Vec::new();
    // 行頭マーカー直後（ルーズリストの段落で改行しない）
    let mut after_marker = false;

    for event in Parser::new_ext(source, options()) {
        match event {
            Event::Start(Tag::Paragraph) if after_marker => {}
            Event::Start(Tag::Heading { .. }) | Event::Start(Tag::Paragraph) => {
                ensure_line_start(&mut out);
            }
            Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::Paragraph) => {
                ensure_line_start(&mut out);
            }
            Event::Start(Tag::List(first)) => lists.push(first),
            Event::End(TagEnd::List(_)) => {
                lists.pop();
            }
            Event::Start(Tag::Item) => {
                ensure_line_start(&mut out);
                let depth = lists.len().saturating_sub(1);
                out.push_str(&"  ".repeat(depth));
                match lists.last_mut() {
                    Some(Some(n)) => {
                        out.push_str(&format!("{}. ", n));
                        *n += 1;
                    }
                    _ => out.push_str("• "),
                }
                after_marker = true;
                continue;
            }
            Event::End(TagEnd::Item) => ensure_line_start(&mut out),
            Event::Start(Tag::Link { dest_url, .. }) => link_urls.push(dest_url.to_string()),
            Event::End(TagEnd::Link) => {
                if let Some(url) = link_urls.pop() {
                    out.push_str(&format!(" ({})", url));
                }
            }
            Event::Text(text) | Event::Code(text) | Event::Html(text) | Event::InlineHtml(text) => {
                out.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => {
                ensure_line_start(&mut out);
                out.push_str("----\n");
            }
            _ => {}
        }
        after_marker = false;
    }

    out.trim_end().to_string()
}

fn ensure_line_start(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
