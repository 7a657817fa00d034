//! Terminal UI: key handling and board rendering. All game decisions live in
//! [`crate::game`]; this layer only translates move results into pixels and
//! messages.

mod app;
mod game_view;

pub use app::App;
