#![warn(missing_docs)]

pub mod option;
pub mod panic;
pub mod result;
