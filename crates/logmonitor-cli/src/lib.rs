pub mod lm_clap;
pub mod lm_lib;
