pub mod engine;
pub mod input_source;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
