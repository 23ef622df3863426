//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use typeport_core::TypeRef;

pub(crate) fn unmappable_type(ty: &TypeRef) -> ! {
    panic!(
        "type mapper: unexpected reference shape {ty:?} \
         (wildcards can only be mapped as type arguments)"
    )
}

pub(crate) fn not_in_progress(qualified_name: &str) -> ! {
    panic!("registry: '{qualified_name}' finalized while not in progress")
}
