//! Layout for text annotated with overlapping, labelled spans and the relations between them.
//!
//! The crate answers two questions a renderer has before it can draw anything:
//!
//! - where to wrap the text so that every display line, labels included, fits a width budget
//!   ([TextLineSplitter]), and
//! - how many label rows each line needs so that labels of overlapping entities and the
//!   connectors of relations never sit on top of each other ([LevelManager],
//!   [RelationLine]).
//!
//! Measuring characters, drawing, and loading annotations are left to the caller; the crate
//! only needs a [CharWidth] to measure with.
//!
//! # Example
//!
//! ```
//! use annotation_layout::*;
//!
//! let metrics = CellMetrics::new(Px(8.0));
//! let labels = LabelList::measured([(1, "PER"), (2, "LOC")], &metrics);
//! let entities = Entities::new([
//!     Entity::new(1, 1, 0, 0, 5),
//!     Entity::new(2, 2, 0, 15, 20),
//! ]);
//!
//! let splitter = TextLineSplitter::new(&metrics, &labels, LayoutOptions::new(Px(120.0)));
//! let lines: Vec<TextLine> = splitter
//!     .split("Alice moved to Paris last year.", 0, &entities)
//!     .expect("every label is known")
//!     .collect();
//!
//! assert_eq!(lines.len(), 3);
//! assert_eq!(lines[0].levels, 1);
//! ```

mod entity;
pub use entity::*;

mod error;
pub use error::*;

mod geometry;
pub use geometry::*;

/// An immutable interval index over code point offsets
pub mod interval;

mod label;
pub use label::*;

mod level;
pub use level::*;

mod line;
pub use line::*;

mod metrics;
pub use metrics::*;

mod offsets;
pub use offsets::*;

mod options;
pub use options::*;

mod relation;
pub use relation::*;

mod splitter;
pub use splitter::*;

mod units;
pub use units::*;

mod width;
pub use width::*;
