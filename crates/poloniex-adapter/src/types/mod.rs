/*
[INPUT]:  Exchange command vocabulary and call arguments
[OUTPUT]: Typed command names and ordered parameter mappings
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API commands are added or parameter encoding changes
*/

pub mod enums;
pub mod params;

pub use enums::*;
pub use params::*;
