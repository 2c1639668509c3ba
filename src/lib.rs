pub mod config;
pub mod game;
pub mod io;
pub mod store;
pub mod traits;
pub mod util;

#[cfg(test)]
mod test_utils;
