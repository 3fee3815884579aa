pub mod input;

pub use input::{InputAction, SearchInput};
