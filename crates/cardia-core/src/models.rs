pub mod factors;
pub mod lab;
pub mod observation;
pub mod patient;
