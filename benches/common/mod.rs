#![allow(dead_code)]

pub mod benches;
