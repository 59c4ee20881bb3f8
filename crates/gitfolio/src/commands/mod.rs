pub mod generate;
pub mod stats;
pub mod token;
