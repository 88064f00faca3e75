pub mod args;
pub mod serve;
pub mod translate;
