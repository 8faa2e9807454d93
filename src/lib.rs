//! Launch records dashboard: an immutable launch table, two input controls
//! and three reactive outputs (outcome pie, payload scatter, range readout).

pub mod app;
pub mod callbacks;
pub mod color;
pub mod config;
pub mod controls;
pub mod data;
pub mod figure;
pub mod state;
pub mod ui;
