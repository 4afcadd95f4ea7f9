//! Screen rendering for the catalog manager

pub mod catalog;
