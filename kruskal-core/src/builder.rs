//! Builder for configuring [`KruskalStepper`] runs.

use crate::stepper::KruskalStepper;

/// Run options shared by every run a [`KruskalStepper`] performs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepperConfig {
    pub(crate) allow_empty_graph: bool,
    pub(crate) stop_when_spanning: bool,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            allow_empty_graph: true,
            stop_when_spanning: false,
        }
    }
}

impl StepperConfig {
    /// Returns `true` when zero-node graphs are accepted by `start`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn allow_empty_graph(&self) -> bool { self.allow_empty_graph }

    /// Returns `true` when runs finish as soon as the graph is spanned.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stop_when_spanning(&self) -> bool { self.stop_when_spanning }
}

/// Configures and constructs [`KruskalStepper`] instances.
///
/// # Examples
/// ```
/// use kruskal_core::KruskalBuilder;
///
/// let stepper = KruskalBuilder::new()
///     .with_stop_when_spanning(true)
///     .build();
/// assert!(stepper.config().stop_when_spanning());
/// assert!(stepper.config().allow_empty_graph());
/// ```
#[derive(Clone, Debug, Default)]
pub struct KruskalBuilder {
    config: StepperConfig,
}

impl KruskalBuilder {
    /// Creates a builder populated with default parameters: empty graphs are
    /// allowed and every edge is visited.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls whether `start` accepts a graph with no nodes.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{KruskalBuilder, KruskalError};
    ///
    /// let mut stepper = KruskalBuilder::new().with_empty_graphs(false).build();
    /// let err = stepper.start(Vec::new(), std::iter::empty()).unwrap_err();
    /// assert_eq!(err, KruskalError::EmptyGraph);
    /// ```
    #[must_use]
    pub const fn with_empty_graphs(mut self, allow: bool) -> Self {
        self.config.allow_empty_graph = allow;
        self
    }

    /// Finish a run once the accepted edges span every node instead of
    /// visiting the remaining, necessarily rejected, edges.
    #[must_use]
    pub const fn with_stop_when_spanning(mut self, stop: bool) -> Self {
        self.config.stop_when_spanning = stop;
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn config(&self) -> StepperConfig { self.config }

    /// Constructs an idle [`KruskalStepper`] with this configuration.
    #[must_use]
    pub fn build(self) -> KruskalStepper {
        KruskalStepper::with_config(self.config)
    }
}
