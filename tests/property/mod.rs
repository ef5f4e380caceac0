//! Property-based tests for survey data invariants

mod survey_data;
