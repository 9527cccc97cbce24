pub mod assembler;
pub mod client;
pub mod payload;

pub use assembler::StatementAssembler;
pub use client::{MockYahooClient, StatementProvider, YahooClient};

mod assembler_tests;
