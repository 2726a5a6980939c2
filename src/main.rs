mod api;
mod article;
mod auth;
mod components;
mod config;
mod feed;
mod location;

use components::page::{ChessNews, ChessNewsProps};
use config::PageConfig;
use gloo::console::log;

fn main() {
    let config = PageConfig::from_dom();
    log!(format!("Chess News: articles from {}", config.endpoint));
    yew::Renderer::<ChessNews>::with_props(ChessNewsProps { config }).render();
}
