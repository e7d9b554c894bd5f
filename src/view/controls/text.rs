//! Styled text line, used for headings

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Heading size; terminals have one glyph size, so larger sizes add emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWeight {
    #[default]
    Normal,
    Bold,
}

/// Props for a line of text
#[derive(Debug, Clone)]
pub struct TextProps {
    pub text: String,
    pub size: TextSize,
    pub weight: TextWeight,
    pub uppercase: bool,
    pub color: Color,
}

impl TextProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: TextSize::default(),
            weight: TextWeight::default(),
            uppercase: false,
            color: Color::White,
        }
    }

    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    pub fn weight(mut self, weight: TextWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    fn style(&self) -> Style {
        let mut modifiers = Modifier::empty();
        if self.weight == TextWeight::Bold {
            modifiers |= Modifier::BOLD;
        }
        match self.size {
            TextSize::Small => modifiers |= Modifier::DIM,
            TextSize::Medium => {}
            TextSize::Large => modifiers |= Modifier::BOLD | Modifier::UNDERLINED,
        }
        Style::default().fg(self.color).add_modifier(modifiers)
    }

    fn display(&self) -> String {
        if self.uppercase {
            self.text.to_uppercase()
        } else {
            self.text.clone()
        }
    }
}

/// Render `props` on the first row of `area`
pub fn render_text(frame: &mut Frame, area: Rect, props: &TextProps) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let line = Line::from(Span::styled(props.display(), props.style()));
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(area.x, area.y, area.width, 1),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::controls::test_support::render_rows;

    #[test]
    fn test_uppercase_heading() {
        let props = TextProps::new("Set parameters").uppercase(true);
        let rows = render_rows(20, 1, |frame, area| render_text(frame, area, &props));
        assert!(rows[0].starts_with("SET PARAMETERS"));
    }

    #[test]
    fn test_weight_and_size_map_to_modifiers() {
        let bold = TextProps::new("a").weight(TextWeight::Bold).style();
        assert!(bold.add_modifier.contains(Modifier::BOLD));

        let large = TextProps::new("a").size(TextSize::Large).style();
        assert!(large.add_modifier.contains(Modifier::UNDERLINED));

        let plain = TextProps::new("a").style();
        assert!(plain.add_modifier.is_empty());
    }
}
