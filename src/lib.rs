pub mod config;
pub mod effects;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod interpolate;
pub mod renderer;
pub mod score;
pub mod screen;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
