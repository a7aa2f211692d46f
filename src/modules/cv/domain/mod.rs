pub mod entities;
pub mod markup;
