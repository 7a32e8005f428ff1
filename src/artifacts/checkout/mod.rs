//! Checkout planning
//!
//! Switching the working directory from one commit to another is planned in
//! full before anything is touched, so an untracked file in the way aborts the
//! operation with the working directory and index unchanged.

pub mod migration;
