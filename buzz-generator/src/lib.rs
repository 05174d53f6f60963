// Domain types, prompt formatting and the generation pipeline
pub mod generator;

// Session history of completed runs
pub mod history;

// OpenAI-backed content provider
pub mod provider;

// Command-line arguments
pub mod cli;

// Logging and filesystem helpers
pub mod utils;

// Terminal application state, models and rendering
pub mod app;
pub mod models;
pub mod ui;
