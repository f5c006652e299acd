//! Frontend domain pages

pub mod a001_employee;
