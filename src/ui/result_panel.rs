use iced::widget::{Space, container, scrollable, text};
use iced::{Element, Font, Length};

use crate::app::Message;

use super::style;

/// The JSON dump, or an empty area until something has been fetched.
pub fn view<'a>(dump: Option<String>) -> Element<'a, Message> {
    let Some(dump) = dump else {
        return Space::new(Length::Fill, Length::Fill).into();
    };

    container(
        scrollable(
            container(text(dump).size(13).font(Font::MONOSPACE))
                .padding(10)
                .width(Length::Fill)
                .style(style::dump_style),
        )
        .height(Length::Fill),
    )
    .padding(16)
    .height(Length::Fill)
    .into()
}
