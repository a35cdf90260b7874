pub mod quiz;

pub use quiz::{Question, Quiz};
