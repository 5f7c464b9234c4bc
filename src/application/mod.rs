//! Application layer: the components that react to page events.
//!
//! `OrderSummaryCalculator` keeps the price display in step with the line
//! items, `SubmissionSimulator` runs the timed payment messages, and
//! `CheckoutPage` wires both to an explicitly supplied `PageContext`.

pub mod calculator;
pub mod page;
pub mod simulator;
