use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

pub const BG: Color = Color {
    r: 18.0 / 255.0,
    g: 21.0 / 255.0,
    b: 27.0 / 255.0,
    a: 1.0,
};
pub const HEADER_BG: Color = Color {
    r: 25.0 / 255.0,
    g: 30.0 / 255.0,
    b: 38.0 / 255.0,
    a: 1.0,
};
/// Code-block background for the JSON dump, a shade below the window.
pub const DUMP_BG: Color = Color {
    r: 13.0 / 255.0,
    g: 16.0 / 255.0,
    b: 21.0 / 255.0,
    a: 1.0,
};
pub const DISABLED_BG: Color = Color {
    r: 37.0 / 255.0,
    g: 45.0 / 255.0,
    b: 56.0 / 255.0,
    a: 1.0,
};
pub const BORDER: Color = Color {
    r: 48.0 / 255.0,
    g: 58.0 / 255.0,
    b: 70.0 / 255.0,
    a: 1.0,
};
pub const TEXT: Color = Color {
    r: 230.0 / 255.0,
    g: 236.0 / 255.0,
    b: 244.0 / 255.0,
    a: 1.0,
};
pub const TEXT_MUTED: Color = Color {
    r: 132.0 / 255.0,
    g: 145.0 / 255.0,
    b: 160.0 / 255.0,
    a: 1.0,
};
pub const PRIMARY: Color = Color {
    r: 58.0 / 255.0,
    g: 201.0 / 255.0,
    b: 111.0 / 255.0,
    a: 1.0,
};
pub const PRIMARY_HOVER: Color = Color {
    r: 71.0 / 255.0,
    g: 214.0 / 255.0,
    b: 124.0 / 255.0,
    a: 1.0,
};
pub const DANGER: Color = Color {
    r: 226.0 / 255.0,
    g: 92.0 / 255.0,
    b: 92.0 / 255.0,
    a: 1.0,
};

pub fn app_theme() -> Theme {
    Theme::custom(
        "Snaptail".to_string(),
        iced::theme::Palette {
            background: BG,
            text: TEXT,
            primary: PRIMARY,
            success: PRIMARY,
            danger: DANGER,
        },
    )
}

pub fn window_style(_theme: &Theme) -> container::Style {
    container::Style::default()
        .background(Background::Color(BG))
        .color(TEXT)
}

/// Full-width bar holding the heading and trigger; square corners, hairline border.
pub fn header_bar_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(HEADER_BG)),
        text_color: Some(TEXT),
        border: Border {
            radius: 0.0.into(),
            width: 1.0,
            color: BORDER,
        },
        shadow: Shadow::default(),
    }
}

/// Monospace dump area, tinted with the accent so it reads as output.
pub fn dump_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DUMP_BG)),
        text_color: Some(TEXT),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: Color { a: 0.35, ..PRIMARY },
        },
        shadow: Shadow::default(),
    }
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active | button::Status::Pressed => PRIMARY,
        button::Status::Hovered => PRIMARY_HOVER,
        button::Status::Disabled => DISABLED_BG,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: if matches!(status, button::Status::Disabled) {
            TEXT_MUTED
        } else {
            BG
        },
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: bg,
        },
        shadow: Default::default(),
    }
}
