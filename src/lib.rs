//! Australian Take-Home Pay Estimator
//!
//! This crate converts a gross rate at any pay frequency into an annual estimate of
//! taxable income, income tax, Medicare levy, superannuation and net pay, for both
//! permanent employees and contractors, using the 2024-25 resident tax rates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
