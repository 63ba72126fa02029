// Skill heatmap: level resolution, catalog grouping, palette lookup and the
// views built from them. Everything below `handlers` is pure and synchronous.

pub mod catalog;
pub mod handlers;
pub mod palette;
pub mod resolver;
pub mod views;
