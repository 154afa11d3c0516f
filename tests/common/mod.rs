#![allow(dead_code)]

pub mod asserts;
pub mod builders;
pub mod downstream;
pub mod headers;
