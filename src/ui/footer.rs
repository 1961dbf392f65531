use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " t: Theme │ l: Layout │ ←↑↓→: Move │ Enter: Click │ q: Quit";

pub struct Footer<'a> {
    palette: &'a Palette,
    toast: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(palette: &'a Palette, toast: Option<&'a str>) -> Self {
        Self { palette, toast }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let dim_style = Style::default()
            .fg(self.palette.dim)
            .bg(self.palette.background);
        let toast_style = Style::default()
            .fg(self.palette.accent)
            .bg(self.palette.background)
            .add_modifier(Modifier::BOLD);

        let (left, left_style) = match self.toast {
            Some(message) => (format!(" {}", message), toast_style),
            None => (HINTS.to_string(), dim_style),
        };
        let version = format!("v{} ", VERSION);

        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), dim_style),
            Span::styled(version, dim_style),
        ]);

        Paragraph::new(line)
            .style(dim_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            )
    }
}
