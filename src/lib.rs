//! Bloom Analyzer - Cognitive-level analysis of exam question papers.
//!
//! This crate classifies exam questions by cognitive complexity using
//! Bloom's Taxonomy, comparing the observed keyword-based distribution
//! against a configurable ideal distribution and emitting per-question
//! and document-level recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
