pub mod params;
pub mod paths;
pub mod request;
pub mod structure;
