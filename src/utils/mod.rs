pub mod colors;
pub mod formatting;
pub mod fs;
pub mod path;
pub mod table;
