// src/validate.rs
//
// Cross-checks the override catalogue against what classification
// actually produced. Runs to completion before a single byte of schema
// is rendered; both failures are fatal.

use crate::catalogue::Catalogue;
use crate::error::Error;
use crate::schema::AttributeRecord;

pub fn check(cat: &Catalogue, attrs: &[AttributeRecord]) -> Result<(), Error> {
    check_completeness(cat, attrs)?;
    check_disjoint(cat)
}

/// Every catalogue name must have produced a record. An orphaned name is
/// a typo in the catalogue, or the index dropped the attribute.
pub fn check_completeness(cat: &Catalogue, attrs: &[AttributeRecord]) -> Result<(), Error> {
    for (_, names) in cat.sets() {
        for name in *names {
            if !attrs.iter().any(|a| a.name == *name) {
                return Err(Error::CatalogueTypo(s!(*name)));
            }
        }
    }
    Ok(())
}

/// No name may sit in two sets. A violation is a real classification
/// ambiguity someone has to resolve by hand; there is deliberately no
/// priority order to fall back on. Holds independent of any input.
pub fn check_disjoint(cat: &Catalogue) -> Result<(), Error> {
    let sets = cat.sets();
    for (i, (first, names)) in sets.iter().enumerate() {
        for (second, others) in &sets[i + 1..] {
            for name in *names {
                if others.contains(name) {
                    return Err(Error::CatalogueOverlap {
                        name: s!(*name),
                        first: first.label(),
                        second: second.label(),
                    });
                }
            }
        }
    }
    Ok(())
}
