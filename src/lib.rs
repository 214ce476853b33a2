//! # ttrack - plain-text time tracking
//!
//! A command-line time tracker that keeps everything in one human-editable
//! text file. Each line is either a date header, a workday clock-in/out
//! mark, or an entry:
//!
//! ```text
//! 2024-03-04
//!   >09:00
//!   x $ 1h15m review pull requests +acme @office
//!   .. standup
//!   <17:30
//! $ 2024-03-05 13:00-13:20 call with client +acme
//! ```
//!
//! ## Features
//!
//! - **Flexible durations**: `1h15m`, dot tallies (`...` = 45 minutes) and
//!   clock ranges (`13:00-13:20`)
//! - **Date blocks**: a bare date line applies to the indented lines below it
//! - **Tags**: one `+project` and one `@context` per entry
//! - **Summaries**: per day or ISO week, with billable and worked totals
//! - **Hooks**: shell commands after `add` and around `edit`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ttrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod timelog;
