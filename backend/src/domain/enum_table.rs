//! Static translation tables between two closed enumerations.
//!
//! Each boundary (wire and storage) declares one table per enumeration it
//! renames. Tables are checked once at start-up with [`EnumTable::verify`], so
//! a variant added on one side without a counterpart stops the process before
//! any request is served.

use std::fmt::Debug;

use super::error::MappingError;

#[derive(Debug)]
pub struct EnumTable<L: 'static, R: 'static> {
    kind: &'static str,
    pairs: &'static [(L, R)],
}

impl<L: 'static, R: 'static> EnumTable<L, R> {
    pub const fn new(kind: &'static str, pairs: &'static [(L, R)]) -> Self {
        Self { kind, pairs }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl<L, R> EnumTable<L, R>
where
    L: Copy + PartialEq + Debug + 'static,
    R: Copy + PartialEq + Debug + 'static,
{
    pub fn forward(&self, left: L) -> Result<R, MappingError> {
        self.pairs
            .iter()
            .find(|(l, _)| *l == left)
            .map(|(_, r)| *r)
            .ok_or_else(|| self.unknown(left))
    }

    pub fn backward(&self, right: R) -> Result<L, MappingError> {
        self.pairs
            .iter()
            .find(|(_, r)| *r == right)
            .map(|(l, _)| *l)
            .ok_or_else(|| self.unknown(right))
    }

    /// Check the table is a bijection between `all_left` and `all_right`.
    pub fn verify(&self, all_left: &[L], all_right: &[R]) -> Result<(), MappingError> {
        if all_left.len() != all_right.len() {
            return Err(self.mismatch(format!(
                "{} variants on the left, {} on the right",
                all_left.len(),
                all_right.len()
            )));
        }
        if self.pairs.len() != all_left.len() {
            return Err(self.mismatch(format!(
                "{} pairs for {} variants",
                self.pairs.len(),
                all_left.len()
            )));
        }

        for left in all_left {
            let hits = self.pairs.iter().filter(|(l, _)| l == left).count();
            if hits != 1 {
                return Err(self.mismatch(format!("{:?} appears {} times", left, hits)));
            }
        }
        for right in all_right {
            let hits = self.pairs.iter().filter(|(_, r)| r == right).count();
            if hits != 1 {
                return Err(self.mismatch(format!("{:?} appears {} times", right, hits)));
            }
        }

        Ok(())
    }

    fn unknown(&self, value: impl Debug) -> MappingError {
        MappingError::UnknownVariant {
            kind: self.kind,
            value: format!("{:?}", value),
        }
    }

    fn mismatch(&self, detail: String) -> MappingError {
        MappingError::TableMismatch {
            kind: self.kind,
            detail,
        }
    }
}
