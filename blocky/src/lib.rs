pub use board::*;
pub use colour::*;
pub use errors::*;
pub use goal::*;
pub use grid::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod colour;
mod errors;
mod goal;
mod grid;
