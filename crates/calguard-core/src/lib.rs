//! # Calguard Core Library
//!
//! This library provides the core engine for Calguard: conflict detection
//! and free-slot search over calendar events aggregated from multiple
//! sources. Callers hand it a flat event list for a time window; the engine
//! never talks to calendar providers itself.
//!
//! ## Architecture
//!
//! - **Events**: validated interval records built from raw provider payloads
//! - **Categorization**: calendar-source patterns, a TOML-backed registry,
//!   and title keywords resolve every event to one of six categories
//! - **Detection**: a pairwise overlap scan classified by a fixed severity
//!   table, assembled into a severity-sorted report with remediation
//!   suggestions, fronted by an optional read-through TTL cache
//! - **Slots**: a per-day walk of the working window that surfaces gaps
//!   long enough for a requested duration
//!
//! ## Key Components
//!
//! - [`ConflictDetector`]: the detection pipeline and its report types
//! - [`Categorizer`]: event classification over a [`CalendarRegistry`]
//! - [`find_free_slots`]: free-slot search within working hours
//! - [`ReportCache`]: TTL cache for serialized reports

pub mod cache;
pub mod category;
pub mod detector;
pub mod error;
pub mod event;
pub mod overlap;
pub mod recommend;
pub mod registry;
pub mod severity;
pub mod slots;

pub use cache::ReportCache;
pub use category::{Categorizer, Category};
pub use detector::{Conflict, ConflictDetector, ConflictReport, ConflictSummary, ReportPeriod};
pub use error::{EngineError, Result, ValidationError};
pub use event::{Event, RawEvent};
pub use registry::{CalendarConfig, CalendarRegistry};
pub use severity::Severity;
pub use slots::{find_free_slots, FreeSlot, WorkingHours};
