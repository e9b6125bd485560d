pub mod ambiguity;
pub mod execution;
pub mod jurisdiction;
pub mod ownership;
