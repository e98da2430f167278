pub mod lint;
pub mod pool;
pub mod render;
pub mod source;
pub mod template;
