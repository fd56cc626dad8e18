pub mod pipeline;
pub mod printer;
