//! Boundary file formats for the evoke pipeline.
//!
//! Protocols come in as PRT text, design matrices go out as SDM text,
//! and event tables go out as tab-separated values. Everything that
//! touches the filesystem lives here; the engine crates stay purely
//! in-memory.

pub mod events;
pub mod prt;
pub mod sdm;

mod text;

pub use events::{format_events_tsv, protocol_events, write_events_tsv, Event};
pub use prt::{parse_prt, read_prt};
pub use sdm::{format_sdm, parse_sdm, read_sdm, write_sdm};
