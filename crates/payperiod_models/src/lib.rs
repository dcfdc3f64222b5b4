//! # payperiod_models (L2: Business Logic)
//!
//! Pay-period calculation for company payroll.
//!
//! This crate provides:
//! - Payment frequencies and company payment configuration
//! - Resolution of stored settings with an explicit frequency fallback
//! - Weekly, biweekly and monthly boundary strategies
//! - Current / previous / next period calculation against any reference date
//! - Contiguous period schedules for period-generation jobs
//!
//! ## Design Principles
//!
//! - **Enum-based dispatch** on [`PaymentFrequency`](periods::PaymentFrequency), no per-company state
//! - **Pure functions** of `(config, reference date)`; "today" comes from an injectable clock
//! - **Builder pattern** for schedules with explicit bounds

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod periods;
