use std::fmt::Display;

use itertools::Itertools;

use super::statistic_logging::log_statistic;

/// Writes statistics under a name built from underscore-separated parts, such that the counters
/// of the search and those of arc consistency end up with distinct names.
#[derive(Clone, Debug, Default)]
pub struct StatisticLogger {
    name_prefix: String,
}

impl StatisticLogger {
    pub fn new(parts: impl IntoIterator<Item = impl Display>) -> Self {
        Self {
            name_prefix: parts.into_iter().join("_"),
        }
    }

    /// A logger whose name is this logger's name extended with `part`.
    pub fn attach_to_prefix(&self, part: impl Display) -> Self {
        let name_prefix = if self.name_prefix.is_empty() {
            part.to_string()
        } else {
            format!("{}_{part}", self.name_prefix)
        };

        Self { name_prefix }
    }

    pub fn log_statistic(&self, value: impl Display) {
        log_statistic(&self.name_prefix, value);
    }
}

#[cfg(test)]
mod tests {
    use super::StatisticLogger;

    #[test]
    fn prefixes_are_joined_with_underscores() {
        let logger = StatisticLogger::new(["arc", "consistency"]).attach_to_prefix("num_revisions");

        assert_eq!(logger.name_prefix, "arc_consistency_num_revisions");
    }

    #[test]
    fn attaching_to_an_empty_prefix_does_not_add_a_separator() {
        let logger = StatisticLogger::default().attach_to_prefix("num_decisions");

        assert_eq!(logger.name_prefix, "num_decisions");
    }
}
