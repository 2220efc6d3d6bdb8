//! Test eligibility filtering.
//!
//! Decides, per regular file found by the traversal, whether the file is an
//! ISA test that should run. Disassembly dumps sit next to the ELF binaries
//! in the corpus and are excluded by name before any family matching.

use crate::arch::TestFamily;

/// Substring marking a disassembly dump artifact rather than an ELF test.
const DUMP_MARKER: &str = ".dump";

/// Whether a file basename names an eligible test.
///
/// A basename containing `.dump` is never eligible, regardless of any family
/// match. Otherwise the basename is eligible iff it contains at least one of
/// the active family prefixes as a substring; no anchoring is applied.
pub fn is_eligible(basename: &str, families: &[TestFamily]) -> bool {
    if basename.contains(DUMP_MARKER) {
        return false;
    }
    families.iter().any(|family| family.matches(basename))
}
