pub mod block;
pub mod config;
pub mod demo;
pub mod operations;
pub mod report;
pub mod run;
