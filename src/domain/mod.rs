//! Domain layer: money, parsed figures, line items and the arithmetic that
//! turns them into an order summary. No I/O and no timers live here.

pub mod line_item;
pub mod money;
pub mod numeric;
pub mod order;
pub mod ports;
pub mod submission;
pub mod summary;
