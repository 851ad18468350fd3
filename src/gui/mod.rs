mod app;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::BeeHireApp;
pub use message::Message;
pub use state::AppState;

use std::path::PathBuf;

pub fn run(store_file: PathBuf) -> iced::Result {
    iced::application(
        move || BeeHireApp::new(store_file.clone()),
        BeeHireApp::update,
        BeeHireApp::view,
    )
    .title("BeeHire")
    .run()
}
