// iconforge - app/mod.rs
//
// Application layer: the platform emitters and the run driver.
// Dependencies: core, platform, util.

pub mod android;
pub mod generate;
pub mod ios;
