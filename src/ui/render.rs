use crate::ui::app::App;
use crate::ui::emoji::{EmojiScreenState, EMOJI_LIST};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_rects, layout_regions};
use crate::ui::theme::{palette, Palette};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, state: &EmojiScreenState) {
    let palette = palette(state.is_dark_theme);
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );
    frame.render_widget(Header::new(state, palette).widget(header), header);

    // Both layouts are the same cards; only the column count differs.
    let columns = if state.is_linear_layout {
        1
    } else {
        app.grid_columns()
    };
    draw_cards(frame, body, columns, app.selected(), palette);

    frame.render_widget(Footer::new(palette, app.toast()).widget(footer), footer);
}

fn draw_cards(frame: &mut Frame<'_>, body: Rect, columns: u16, selected: usize, palette: &Palette) {
    for (index, rect) in card_rects(body, columns, EMOJI_LIST.len(), selected) {
        let is_selected = index == selected;
        let fill = if is_selected {
            palette.card_selected
        } else {
            palette.card
        };
        let border_style = if is_selected {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.border)
        };

        let card = Paragraph::new(EMOJI_LIST[index])
            .alignment(Alignment::Center)
            .style(Style::default().bg(fill))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(card, rect);
    }
}
