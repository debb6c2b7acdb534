// iconforge - lib.rs
//
// Library entry point, exposing every module for integration testing and
// for embedding the generator in other build tooling.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
