pub mod code_lens;
pub mod runnable;
