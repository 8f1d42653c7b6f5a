pub mod config;
pub mod error;
pub mod geopoint;
pub mod maneuver;
pub mod openrouteservice;
pub mod profile;
pub mod segment;
pub mod stitcher;
