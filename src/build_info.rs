//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_is_populated() {
        // Either real values or the "unknown" fallback, never empty.
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
        assert!(BUILD_DATE == "unknown" || BUILD_DATE.len() == 10);
    }
}
