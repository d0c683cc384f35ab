pub mod blinker_app;

pub use blinker_app::BlinkerApp;
