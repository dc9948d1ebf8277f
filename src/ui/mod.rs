//! Terminal front end: a searchable game list and a management screen.

pub mod app;
pub mod dashboard;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod manage;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use runtime::run;
