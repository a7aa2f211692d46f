pub mod emblem;
pub mod parameters;
