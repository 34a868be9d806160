use iced::alignment::Alignment;
use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Element, Length};

use crate::app::Message;

use super::style;

pub fn view<'a>(heading: String) -> Element<'a, Message> {
    let fetch_button = button(text("Fetch Data").size(14))
        .on_press(Message::FetchPressed)
        .padding([8, 16])
        .style(style::primary_button);

    container(
        row![
            text(heading).size(20),
            horizontal_space(),
            fetch_button
        ]
        .spacing(12)
        .padding([10, 16])
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(style::header_bar_style)
    .into()
}
