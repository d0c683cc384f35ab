pub mod colors;
pub mod fab;
