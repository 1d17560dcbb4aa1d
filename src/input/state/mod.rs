mod core;
mod pointer;
#[cfg(test)]
mod tests;

pub use core::{GestureState, InputState};
