pub mod area_visitor;
pub mod client;
pub mod errors;
pub mod number_format;
pub mod options;
pub mod perimeter_visitor;
pub mod shapes;
pub mod visitor;

mod tests;
