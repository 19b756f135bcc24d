pub mod edit;
pub mod error;
pub mod grid;
pub mod operation;
pub mod region;
pub mod world;
