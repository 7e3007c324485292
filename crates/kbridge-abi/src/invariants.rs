//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::section::{BinarySection, SectionError, SectionHandle, SectionProvider};

impl<P: SectionProvider> SectionHandle<P> {
    pub(crate) fn ensure_resolved(
        &self,
        result: Result<BinarySection, SectionError>,
    ) -> BinarySection {
        result.unwrap_or_else(|err| {
            panic!(
                "section `{}`: {err} \
                 (build step must place the start marker before the end marker)",
                self.provider().name()
            )
        })
    }
}
