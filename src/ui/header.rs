use crate::ui::emoji::EmojiScreenState;
use crate::ui::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "Emoji Release";

pub struct Header<'a> {
    state: &'a EmojiScreenState,
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a EmojiScreenState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let palette = self.palette;
        let text_style = Style::default().fg(palette.text).bg(palette.bar);
        let title_style = text_style.add_modifier(Modifier::BOLD);

        let switch = if self.state.is_dark_theme {
            "[ ●] Dark"
        } else {
            "[○ ] Light"
        };
        let toggle = format!(
            "{} {}",
            self.state.toggle_icon.glyph(),
            self.state.toggle_content_description
        );
        let actions = format!("{}  │  {} ", switch, toggle);

        // Right-align the actions; count chars, not bytes.
        let title = format!(" {}", TITLE);
        let padding = (area.width as usize)
            .saturating_sub(title.chars().count())
            .saturating_sub(actions.chars().count());

        let line = Line::from(vec![
            Span::styled(title, title_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(actions, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border).bg(palette.bar)),
        )
    }
}
