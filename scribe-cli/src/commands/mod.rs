pub mod apply;
pub mod output;
pub mod run;
