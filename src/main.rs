mod app;
mod config;
mod playback;
mod runtime;
mod session;
mod signal;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
