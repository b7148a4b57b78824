pub mod item;
pub mod template;
