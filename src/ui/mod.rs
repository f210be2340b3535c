pub mod icon;
pub mod motion;
pub mod pages;

pub use icon::{Icon, icons};
