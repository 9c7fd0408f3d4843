mod app;
mod logging;

pub use app::run_app;
