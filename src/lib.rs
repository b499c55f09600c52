pub mod cli;
pub mod console_interface;
pub mod core;
pub mod level_set;
pub mod levels;
pub mod models;

#[cfg(test)]
mod test;
