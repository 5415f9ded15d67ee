pub mod arena;
pub mod text;
pub mod value;
