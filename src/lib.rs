pub mod canvas;
pub mod logo;
