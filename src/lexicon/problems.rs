//! Storage-misuse problem tags.
//!
//! A small sample of these is attached to executive records; the drive
//! populator tools use them to seed implausible personal data.

/// Built-in problem tags.
pub(super) fn builtin() -> Vec<String> {
    [
        "Large personal music collection (>100GB)",
        "Personal movie collection (>500GB)",
        "Personal photo library (>50GB)",
        "Cryptocurrency mining software detected",
        "Steam games installed on work drive",
        "Personal backup files",
        "Non-work video content",
        "Personal software collection",
        "Personal cloud sync folder (>100GB)",
        "Personal business files",
        "Personal financial records",
        "Personal tax documents",
        "Unauthorized media streaming setup",
        "Large personal email archives",
        "Personal virtual machine images",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_problem_list_is_complete() {
        let problems = builtin();
        assert_eq!(problems.len(), 15);
        assert!(problems.iter().all(|p| !p.is_empty()));
    }
}
