pub mod decrypt;
pub mod extract;
pub mod keygen;
pub mod questions;
pub mod schema;
pub mod screen;
