use crate::{
    errors::Result,
    shapes::{Circle, Rectangle},
};

/// One operation per shape variant. Adding a shape means adding a method here.
pub trait Visitor {
    fn visit_circle(&mut self, circle: &Circle) -> Result<()>;
    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Result<()>;
}
