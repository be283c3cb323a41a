pub mod support;

mod campus;
mod misc;
mod script;
mod tasks;
