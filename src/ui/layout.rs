use ratatui::layout::Rect;

/// Rows taken by one emoji card.
pub const CARD_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Place cards for `count` items in `columns` columns inside `body`.
///
/// Scrolls by whole rows so the row holding `selected` is always on screen.
/// Returns `(item index, rect)` pairs for the visible cards only.
pub fn card_rects(body: Rect, columns: u16, count: usize, selected: usize) -> Vec<(usize, Rect)> {
    if count == 0 || columns == 0 || body.width < columns || body.height < CARD_HEIGHT {
        return Vec::new();
    }

    let columns_usize = columns as usize;
    let visible_rows = (body.height / CARD_HEIGHT) as usize;
    let total_rows = count.div_ceil(columns_usize);
    let selected_row = selected.min(count - 1) / columns_usize;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let last_row = (first_row + visible_rows).min(total_rows);

    let cell_width = body.width / columns;
    let mut rects = Vec::new();
    for row in first_row..last_row {
        let y = body.y + (row - first_row) as u16 * CARD_HEIGHT;
        for col in 0..columns {
            let index = row * columns_usize + col as usize;
            if index >= count {
                break;
            }
            let x = body.x + col * cell_width;
            // Last column absorbs the rounding remainder.
            let width = if col + 1 == columns {
                body.width - col * cell_width
            } else {
                cell_width
            };
            rects.push((
                index,
                Rect {
                    x,
                    y,
                    width,
                    height: CARD_HEIGHT,
                },
            ));
        }
    }
    rects
}
