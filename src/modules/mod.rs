pub mod cv;
pub mod logo;
pub mod logs;
pub mod pages;
