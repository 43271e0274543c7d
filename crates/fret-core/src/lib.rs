#![deny(warnings)]
pub mod cost;
pub mod map;
pub mod model;
