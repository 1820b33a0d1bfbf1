//! # FMSim Demos
//!
//! 1. **01_transfer_gate** - gate transfer requests, watch registry changes
//! 2. **02_billing_scan** - scan reimbursable billings and export a report
//!
//! ```bash
//! cargo run -p fmsim-demos --example 01_transfer_gate
//! cargo run -p fmsim-demos --example 02_billing_scan
//! ```
//!
//! `data/` holds a sample rule file and record file for the `fmsim` CLI.

// This crate only contains demos, no library code.
