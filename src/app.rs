use iced::widget::{column, container};
use iced::{Element, Length, Task};
use serde_json::Value;
use tracing::{error, info};

use crate::http::client::fetch_json;
use crate::http::error::FetchError;
use crate::ui;
use crate::ui::style;

/// The fetch-and-render component: one address, one result slot.
pub struct App {
    address: String,
    result: Option<Value>,
}

#[derive(Debug, Clone)]
pub enum Message {
    FetchPressed,
    FetchFinished(Result<Value, FetchError>),
}

impl App {
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        info!(address = %address, "fetch component ready");

        Self {
            address,
            result: None,
        }
    }

    pub fn heading(&self) -> String {
        format!("Fetching from {}", self.address)
    }

    /// Pretty-printed form of the last successful fetch, if any.
    pub fn result_dump(&self) -> Option<String> {
        self.result.as_ref().map(pretty_json)
    }
}

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::FetchPressed => {
            // Overlapping fetches are not guarded; whichever finishes last wins.
            Task::perform(fetch_json(app.address.clone()), Message::FetchFinished)
        }
        Message::FetchFinished(Ok(value)) => {
            app.result = Some(value);
            Task::none()
        }
        Message::FetchFinished(Err(err)) => {
            error!(address = %app.address, error = %err, "error fetching data");
            Task::none()
        }
    }
}

pub fn view(app: &App) -> Element<'_, Message> {
    let header = ui::header::view(app.heading());
    let result = ui::result_panel::view(app.result_dump());

    let layout = column![header, result]
        .spacing(1)
        .height(Length::Fill)
        .width(Length::Fill);

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::window_style)
        .into()
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
