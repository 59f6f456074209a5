use std::fmt;
use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::{Client, Response};
use reqwest::{Result, StatusCode};

const SERVER_URL: &str = "http://127.0.0.1:5000";

/// Kind of text requested from the server.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Words,
    Paragraphs,
    ShoppingList,
}

impl Mode {
    /// Endpoint path serving this mode.
    fn path(self) -> &'static str {
        match self {
            Mode::Words => "/v1/words",
            Mode::Paragraphs => "/v1/paragraphs",
            Mode::ShoppingList => "/v1/shopping_list",
        }
    }
}

/// Failure of a request to the server.
#[derive(Debug)]
enum FetchError {
    /// The request never produced a response.
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Rejected { status: StatusCode, body: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "{e}"),
            FetchError::Rejected { status, body } if body.trim().is_empty() => write!(f, "{status}"),
            FetchError::Rejected { status, body } => write!(f, "{status}: {}", body.trim()),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e)
    }
}

/// Keeps `body` on success, or turns it into the error message otherwise.
///
/// The server explains rejected parameters in the body of its `400`.
fn check_status(status: StatusCode, body: String) -> std::result::Result<String, FetchError> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(FetchError::Rejected { status, body })
    }
}

/// Reads the whole body before looking at the status.
fn read_response(response: Response) -> std::result::Result<String, FetchError> {
    let status = response.status();
    let body = response.text()?;
    check_status(status, body)
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET request to the endpoint of `mode` with query parameters.
    fn get_text(&self, mode: Mode, params: &[(String, String)]) -> std::result::Result<String, FetchError> {
        let response = self.client
            .get(format!("{SERVER_URL}{}", mode.path()))
            .query(params)
            .send()?;

        read_response(response)
    }

    /// Sends a GET request to `/v1/config`.
    fn get_config(&self) -> std::result::Result<String, FetchError> {
        let response = self.client
            .get(format!("{SERVER_URL}/v1/config"))
            .send()?;

        read_response(response)
    }
}

/// Global UI state (MUST persist between frames in egui).
struct LoremUI {
    rest: RESTContext,
    last_text: Option<String>,
    server_config: Option<String>,

    mode: Mode,
    count: i64,
    start_with_lorem_ipsum: bool,
}

impl LoremUI {
    /// Initializes the UI with sane defaults.
    fn new() -> Result<Self> {
        let mut ui = Self {
            rest: RESTContext::new()?,
            last_text: None,
            server_config: None,

            mode: Mode::Paragraphs,
            count: 3,
            start_with_lorem_ipsum: true,
        };
        ui.get_config();
        Ok(ui)
    }

    /// Builds the query parameters for the API.
    ///
    /// `start_with_lorem_ipsum` is only sent for paragraphs.
    fn build_query(&self) -> Vec<(String, String)> {
        let mut params = vec![("count".to_owned(), self.count.to_string())];

        if self.mode == Mode::Paragraphs {
            params.push((
                "start_with_lorem_ipsum".to_owned(),
                self.start_with_lorem_ipsum.to_string(),
            ));
        }

        params
    }

    /// Performs the generation request.
    fn get_generated(&mut self) {
        let params = self.build_query();
        match self.rest.get_text(self.mode, &params) {
            Ok(text) => self.last_text = Some(text),
            Err(e) => self.last_text = Some(format!("Error: {e}")),
        }
    }

    /// Fetches the generator settings shown in the footer.
    fn get_config(&mut self) {
        match self.rest.get_config() {
            Ok(config) => self.server_config = Some(config),
            Err(e) => log::warn!("could not fetch server config: {e}"),
        }
    }
}

impl eframe::App for LoremUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {

            egui::Grid::new("lorem_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {

                    // mode
                    ui.label("Generate");
                    ui.vertical(|ui| {
                        ui.radio_value(&mut self.mode, Mode::Words, "Words");
                        ui.radio_value(&mut self.mode, Mode::Paragraphs, "Paragraphs");
                        ui.radio_value(&mut self.mode, Mode::ShoppingList, "Shopping list");
                    });
                    ui.end_row();

                    // count
                    ui.label("Count");
                    ui.add(
                        egui::DragValue::new(&mut self.count)
                            .range(0..=500)
                            .speed(1),
                    );
                    ui.end_row();

                    // opening phrase
                    if self.mode == Mode::Paragraphs {
                        ui.label("Start with \"Lorem ipsum\"");
                        ui.checkbox(&mut self.start_with_lorem_ipsum, "");
                        ui.end_row();
                    }

                    ui.separator();
                    ui.end_row();

                    // Generate button
                    if ui
                        .add_sized([200.0, 40.0], egui::Button::new("Generate"))
                        .clicked()
                    {
                        self.get_generated();
                    }
                    ui.label("");
                    ui.end_row();
                });

            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(260.0)
                .show(ui, |ui| {
                    if let Some(text) = &self.last_text {
                        ui.label(text);
                    } else {
                        ui.label("Click Generate to start");
                    }
                });

            if let Some(config) = &self.server_config {
                ui.separator();
                ui.small(format!("Server settings: {config}"));
            }
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "rs-lorem",
        options,
        Box::new(|_| Ok(Box::new(LoremUI::new()?))),
    )
}
