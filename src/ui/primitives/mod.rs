pub mod border;
pub mod icon;
pub mod stars;
pub mod text;
