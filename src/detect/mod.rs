pub mod detection_model;
pub mod sanitize;
