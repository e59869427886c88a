//! ami-intake
//!
//! The conversational intake flow that drives the matching pipeline:
//! a scripted bilingual session that captures patient statements
//! verbatim, folds them into a patient record, and asks the aggregator
//! for clinic recommendations.

pub mod recommend;
pub mod session;
