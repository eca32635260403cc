//! Error types for the Kruskal core library.
//!
//! Defines the error enum exposed by the public API, its stable code enum and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::{edge::NodeId, stepper::RunState};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Why an edge was refused before it could reach the stepper.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InvalidEdgeReason {
    /// Both endpoints name the same node.
    SelfLoop,
    /// The weight was zero or negative.
    NonPositiveWeight,
    /// The weight was NaN or infinite.
    NonFiniteWeight,
}

impl fmt::Display for InvalidEdgeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SelfLoop => "self-loop",
            Self::NonPositiveWeight => "non-positive weight",
            Self::NonFiniteWeight => "non-finite weight",
        })
    }
}

/// Error type produced by the disjoint-set forest, the matrix extractor and
/// [`crate::KruskalStepper`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KruskalError {
    /// A node id was never registered with the forest.
    #[error("node {node} is not part of the graph")]
    UnknownNode {
        /// The unregistered node id.
        node: NodeId,
    },
    /// An edge failed validation.
    #[error("edge ({left}, {right}) is invalid: {reason}")]
    InvalidEdge {
        /// First endpoint as supplied.
        left: NodeId,
        /// Second endpoint as supplied.
        right: NodeId,
        /// Validation failure.
        reason: InvalidEdgeReason,
    },
    /// An operation was invoked in a state that does not permit it.
    #[error("cannot {operation} while the run is {state}")]
    InvalidStateTransition {
        /// Name of the rejected operation.
        operation: &'static str,
        /// State the run was in.
        state: RunState,
    },
    /// The caller disallowed empty graphs and supplied no nodes.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// A weight matrix row did not match the row count.
    #[error("matrix row {row} has {actual} entries but {expected} were expected")]
    NonSquareMatrix {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of rows in the matrix.
        expected: usize,
        /// Number of entries found in the row.
        actual: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`KruskalError`] variants.
    enum KruskalErrorCode for KruskalError {
        /// A node id was never registered with the forest.
        UnknownNode => UnknownNode { .. } => "UNKNOWN_NODE",
        /// An edge failed validation.
        InvalidEdge => InvalidEdge { .. } => "INVALID_EDGE",
        /// An operation was invoked in a state that does not permit it.
        InvalidStateTransition => InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
        /// The caller disallowed empty graphs and supplied no nodes.
        EmptyGraph => EmptyGraph => "EMPTY_GRAPH",
        /// A weight matrix row did not match the row count.
        NonSquareMatrix => NonSquareMatrix { .. } => "NON_SQUARE_MATRIX",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KruskalError>;
