//! ISA test family selection.
//!
//! Maps an architecture to the ordered set of test family prefixes that apply
//! to it. Family names follow the upstream riscv-tests convention:
//! `rv<width><env><ext>-<mode>` where `-p` tests run bare (physical memory)
//! and `-v` tests run under virtual memory, which requires the supervisor
//! extension.

use std::fmt;

use super::ArchSpec;

/// Extension letters that contribute their own test families, in the fixed
/// selection order.
const OPTIONAL_EXTENSIONS: [char; 5] = ['m', 'a', 'f', 'd', 'c'];

/// A test family prefix (e.g. `rv32ui-p`).
///
/// Eligibility is decided by substring containment against file basenames; no
/// anchoring is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFamily(String);

impl TestFamily {
    /// Returns the family prefix as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a file basename belongs to this family.
    pub fn matches(&self, basename: &str) -> bool {
        basename.contains(&self.0)
    }
}

impl fmt::Display for TestFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Selects the ISA test families that apply to an architecture.
///
/// Always includes the base `ui`/`mi` machine-mode families for the
/// architecture's width. The supervisor extension adds the virtual-memory
/// `ui-v` family and the `si-p` supervisor tests. Each optional extension in
/// `m, a, f, d, c` order adds its user-mode family, plus its virtual-memory
/// variant when supervisor mode is present.
///
/// The returned order reflects the selection logic and only matters for
/// progress output; downstream matching treats it as a set. Uniqueness is not
/// enforced (a duplicate prefix is harmless).
pub fn select_test_families(arch: &ArchSpec) -> Vec<TestFamily> {
    let width = arch.width.bits();
    let mut families: Vec<TestFamily> = vec![
        TestFamily(format!("rv{width}ui-p")),
        TestFamily(format!("rv{width}mi-p")),
    ];

    let supervisor = arch.has_extension('s');
    if supervisor {
        families.push(TestFamily(format!("rv{width}ui-v")));
        families.push(TestFamily(format!("rv{width}si-p")));
    }

    for ext in OPTIONAL_EXTENSIONS {
        if arch.has_extension(ext) {
            families.push(TestFamily(format!("rv{width}u{ext}-p")));
            if supervisor {
                families.push(TestFamily(format!("rv{width}u{ext}-v")));
            }
        }
    }

    families
}
