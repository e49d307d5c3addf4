#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod gene;
pub mod io;
pub mod seq;
