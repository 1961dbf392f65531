use ratatui::style::Color;

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub bar: Color,
    pub border: Color,
    pub card: Color,
    pub card_selected: Color,
    pub accent: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfd, 0xfb, 0xff),
    text: Color::Rgb(0x1a, 0x1b, 0x20),
    dim: Color::Rgb(0x6b, 0x72, 0x80),
    bar: Color::Rgb(0xc3, 0xc6, 0xf4),
    border: Color::Rgb(0xc4, 0xc6, 0xd0),
    card: Color::Rgb(0x41, 0x5f, 0x91),
    card_selected: Color::Rgb(0x2a, 0x47, 0x78),
    accent: Color::Rgb(0xda, 0x77, 0x56),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x1a, 0x1b, 0x20),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    dim: Color::Rgb(0x8e, 0x90, 0x99),
    bar: Color::Rgb(0x2a, 0x2d, 0x4a),
    border: Color::Rgb(0x40, 0x40, 0x40),
    card: Color::Rgb(0xaa, 0xc7, 0xff),
    card_selected: Color::Rgb(0xd6, 0xe3, 0xff),
    accent: Color::Rgb(0xda, 0x77, 0x56),
};

pub fn palette(is_dark: bool) -> &'static Palette {
    if is_dark {
        &DARK
    } else {
        &LIGHT
    }
}
