pub mod list;
pub mod map;
pub mod push_pop;
