pub mod location;
pub mod movement;
pub mod product;
pub mod report;
pub mod view;
