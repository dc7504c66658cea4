pub mod images;
pub mod routing;
pub mod store;
