//! Logic Module - Synthesis Engines
//!
//! Per-sample pipeline, leaf first: `specs` (parameter catalog) → `context`
//! (operating snapshot) → `physics` (correlation) → `failure` (injection) →
//! `scoring` → `features`, composed by `assembler`. `dataset` holds the
//! output schema and CSV writer.

pub mod assembler;
pub mod context;
pub mod dataset;
pub mod failure;
pub mod features;
pub mod physics;
pub mod sample;
pub mod scoring;
pub mod specs;
