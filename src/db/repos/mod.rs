pub mod board;
pub mod column;
pub mod dependency;
pub mod epic;
pub mod issue;
