//! Gravure: device-independent plotting of board layers.
//!
//! Gravure turns a parsed circuit board into an ordered stream of abstract
//! drawing commands, one layer at a time. It handles:
//!
//! - **Boards**: the plottable board model of modules, pads, tracks, vias,
//!   zones and annotations ([`board`] module)
//! - **Plotting**: the layer walk, pad flashing and width-compensated
//!   stroke rendering ([`plot`] module)
//! - **Backends**: the minimal [`Plotter`] drawing surface, plus a
//!   [`CommandRecorder`] that captures the stream for diffing and testing
//!   ([`plotter`] and [`record`] modules)
//! - **Colors**: the standard and greyscale-diff layer palettes
//!   ([`palette`] module)
//!
//! ```
//! use gravure::{Board, BoardPlotter, CommandRecorder};
//! use gravure_core::LayerId;
//!
//! let board = Board::default();
//! let mut recorder = CommandRecorder::new();
//! let mut plotter = BoardPlotter::new(&mut recorder);
//! plotter.plot_one_board_layer(&board, LayerId::F_CU)?;
//! # Ok::<(), gravure::PlotError>(())
//! ```

pub mod board;
pub mod error;
pub mod palette;
pub mod plot;
pub mod plotter;
pub mod record;

pub use board::Board;
pub use error::PlotError;
pub use palette::LayerPalette;
pub use plot::{BoardPlotter, DEFAULT_LINE_WIDTH, DrillMarks, PlotOptions};
pub use plotter::{Fill, Plotter, TextHJustify, TextVJustify};
pub use record::{CommandRecorder, PlotCommand};
