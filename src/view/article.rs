//! Article rendering surface
//!
//! Draws the article with the presentation hints derived from the applied
//! style variables: colors, column width, emphasis and line spacing.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::article::{Article, ArticleStyle};

/// Columns kept free on each side of the text column
const SIDE_PADDING: u16 = 2;

/// Render `article` into `area`
pub fn render_article(frame: &mut Frame, area: Rect, article: &Article, style: &ArticleStyle) {
    frame.render_widget(Block::default().style(style.background_style()), area);
    if area.width <= SIDE_PADDING * 2 || area.height == 0 {
        return;
    }

    let column_width = area
        .width
        .saturating_sub(SIDE_PADDING * 2)
        .min(style.max_columns);
    let x = area.x + (area.width - column_width) / 2;
    let column = Rect::new(x, area.y + 1, column_width, area.height.saturating_sub(1));

    let lines = article_lines(article, style, column_width as usize);
    frame.render_widget(Paragraph::new(lines).style(style.background_style()), column);
}

/// Lay out the article as styled lines no wider than `width`
pub fn article_lines(article: &Article, style: &ArticleStyle, width: usize) -> Vec<Line<'static>> {
    let text_style = style.text_style();
    let title_style = text_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let meta_style = Style::default()
        .fg(style.fg)
        .bg(style.bg)
        .add_modifier(Modifier::DIM);

    let mut lines = Vec::new();
    for segment in wrap_words(&article.title, width) {
        lines.push(Line::from(Span::styled(segment, title_style)));
    }
    if !style.font_family.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Set in {}", style.font_family),
            meta_style,
        )));
    }

    for paragraph in &article.paragraphs {
        lines.push(Line::default());
        for (i, segment) in wrap_words(paragraph, width).into_iter().enumerate() {
            if i > 0 {
                for _ in 0..style.line_gap {
                    lines.push(Line::default());
                }
            }
            lines.push(Line::from(Span::styled(segment, text_style)));
        }
    }
    lines
}

/// Greedy word wrap by display width
///
/// Words longer than `width` are split across lines.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for ch in word.chars() {
                let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
