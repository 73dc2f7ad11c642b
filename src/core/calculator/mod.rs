pub mod accounting;
pub mod duration;
pub mod slots;
