mod merge_with_conflicts;
mod merge_validation_failures;
