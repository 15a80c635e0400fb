//! Counters kept by the [`Solver`] and the machinery for writing them out.
pub(crate) mod statistic_logger;
pub(crate) mod statistic_logging;

use std::fmt::Display;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

#[cfg(doc)]
use crate::Solver;

/// Something which can be written out as one or more statistic lines.
///
/// Every [`Display`] value is a single statistic; structs of counters get an implementation
/// through [`create_statistics_struct!`].
pub trait Statistic {
    /// Writes `self` under the name held by `statistic_logger`.
    fn log(&self, statistic_logger: StatisticLogger);
}

impl<Value: Display> Statistic for Value {
    fn log(&self, statistic_logger: StatisticLogger) {
        statistic_logger.log_statistic(self);
    }
}

/// Declares a struct of counters which starts at zero and logs every field as its own statistic,
/// named after the field.
///
/// ```rust
/// # use wordfill_core::create_statistics_struct;
/// create_statistics_struct!(
///     /// Counters of a hypothetical pass over the grid.
///     GridStatistics {
///         num_cells_visited: u64,
///         num_blocked_cells: u64,
///     }
/// );
///
/// let statistics = GridStatistics::default();
/// assert_eq!(statistics.num_cells_visited + statistics.num_blocked_cells, 0);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    ($(#[$doc:meta])* $name:ident { $($(#[$field_doc:meta])* $field:ident : $type:ident),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default)]
        pub(crate) struct $name {
            $($(#[$field_doc])* pub(crate) $field: $type),+
        }

        impl $crate::statistics::Statistic for $name {
            fn log(&self, logger: $crate::statistics::StatisticLogger) {
                $(
                    let field_logger = logger.attach_to_prefix(stringify!($field));
                    $crate::statistics::Statistic::log(&self.$field, field_logger);
                )+
            }
        }
    };
}
