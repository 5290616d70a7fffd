//! Ports layer for the UTXO ledger.
//!
//! Defines the hexagonal architecture port traits:
//! - Inbound (Driving) ports: API exposed to the enclosing node
//! - Outbound (Driven) ports: Dependencies on external systems

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
