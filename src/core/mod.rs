pub mod assembler;
pub mod config;
pub mod cover;
pub mod grammar;
pub mod prng;
pub mod route;
pub mod seed;
pub mod tables;
pub mod text;
pub mod viewer;
