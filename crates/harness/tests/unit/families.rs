//! # Test Family Selection Tests
//!
//! Verifies the mapping from an architecture to the ISA test families that
//! apply to it: base families, supervisor-gated virtual-memory variants, and
//! the fixed optional-extension order.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rvregress_core::arch::{select_test_families, ArchSpec, BaseWidth};

/// Renders a family list for compact comparison.
fn names(arch: &ArchSpec) -> Vec<String> {
    select_test_families(arch)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// A machine-mode-only architecture gets just the two base families.
#[test]
fn base_families_only() {
    let arch = ArchSpec::new(BaseWidth::Rv32, "I");
    assert_eq!(names(&arch), vec!["rv32ui-p", "rv32mi-p"]);
}

/// `rv32imu`: base families plus the M-extension family; no supervisor, so
/// no `-v` variant anywhere.
#[test]
fn rv32imu_selects_m_without_virtual_memory() {
    let arch = ArchSpec::new(BaseWidth::Rv32, "IMU");
    let selected = names(&arch);
    assert_eq!(selected, vec!["rv32ui-p", "rv32mi-p", "rv32um-p"]);
    assert!(selected.iter().all(|family| !family.ends_with("-v")));
}

/// `rv64sifd`: supervisor mode adds `ui-v` and `si-p`, and each present
/// optional extension contributes both its `-p` and `-v` families.
#[test]
fn rv64sifd_selects_supervisor_variants() {
    let arch = ArchSpec::new(BaseWidth::Rv64, "SIFD");
    assert_eq!(
        names(&arch),
        vec![
            "rv64ui-p", "rv64mi-p", "rv64ui-v", "rv64si-p", "rv64uf-p", "rv64uf-v", "rv64ud-p",
            "rv64ud-v",
        ]
    );
}

/// The canonical `RV64AIMSU` build.
#[test]
fn rv64aimsu_full_selection() {
    let arch = ArchSpec::new(BaseWidth::Rv64, "AIMSU");
    assert_eq!(
        names(&arch),
        vec![
            "rv64ui-p", "rv64mi-p", "rv64ui-v", "rv64si-p", "rv64um-p", "rv64um-v", "rv64ua-p",
            "rv64ua-v",
        ]
    );
}

/// Every optional extension present with supervisor mode: 2 base + 2
/// supervisor + 5 extensions x 2 modes.
#[test]
fn all_extensions_with_supervisor() {
    let arch = ArchSpec::new(BaseWidth::Rv64, "IMAFDCSU");
    let selected = names(&arch);
    assert_eq!(selected.len(), 14);
    for ext in ['m', 'a', 'f', 'd', 'c'] {
        assert!(selected.contains(&format!("rv64u{ext}-p")));
        assert!(selected.contains(&format!("rv64u{ext}-v")));
    }
}

/// Optional extensions are emitted in the fixed `m, a, f, d, c` order, not
/// the order the letters appear in the tag.
#[test]
fn optional_extension_order_is_fixed() {
    let arch = ArchSpec::new(BaseWidth::Rv32, "ICFM");
    assert_eq!(
        names(&arch),
        vec!["rv32ui-p", "rv32mi-p", "rv32um-p", "rv32uf-p", "rv32uc-p"]
    );
}

/// Width flows into every family name.
#[rstest]
#[case(BaseWidth::Rv32, "rv32ui-p")]
#[case(BaseWidth::Rv64, "rv64ui-p")]
fn width_prefixes_families(#[case] width: BaseWidth, #[case] first: &str) {
    let arch = ArchSpec::new(width, "I");
    assert_eq!(names(&arch)[0], first);
}

/// Family matching is bare substring containment against basenames.
#[test]
fn family_matches_by_substring() {
    let arch = ArchSpec::new(BaseWidth::Rv32, "IMU");
    let families = select_test_families(&arch);
    let ui = &families[0];
    assert!(ui.matches("rv32ui-p-add"));
    assert!(ui.matches("prefixed-rv32ui-p-add"));
    assert!(!ui.matches("rv32ui-v-add"));
}
