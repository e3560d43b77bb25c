pub mod actions;
pub mod converters;
pub mod resize;
