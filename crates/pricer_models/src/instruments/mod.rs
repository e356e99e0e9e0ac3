//! Instrument definitions.
//!
//! Only European FX vanilla options are modelled. See [`fx`].

pub mod fx;
