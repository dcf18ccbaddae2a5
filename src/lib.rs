pub mod builder;
pub mod compare;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod ids;
pub mod parser;
pub mod reference;
pub mod render;
pub mod table;
// cmd and reports are binary modules (see main.rs).
