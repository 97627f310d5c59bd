//! Core domain: concept model, batch types, and the inactivation processor

pub mod batch;
pub mod concept;
pub mod processor;
