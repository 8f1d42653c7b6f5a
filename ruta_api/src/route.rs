pub mod driving_route;
pub mod walking_route;
