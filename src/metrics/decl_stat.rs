//! Declaration classification
//!
//! Counts a module's top-level declarations by kind. Abstractness is derived
//! from these counts: `contract_types` is the subset of `all_types` that are
//! exported, contract-only types.
//!
//! Counters are signed so that subtracting a subset's contribution from an
//! aggregate can never wrap; classification itself only produces values ≥ 0.

use crate::core::{Declaration, TypeKind};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Per-kind declaration counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclStat {
    pub functions: i64,
    /// All type declarations, contract types included
    pub all_types: i64,
    /// Exported contract-only types
    pub contract_types: i64,
    pub constants: i64,
    pub variables: i64,
    pub other: i64,
}

impl DeclStat {
    /// Classify a declaration list; every declaration lands in exactly one bucket
    pub fn classify(declarations: &[Declaration]) -> Self {
        declarations
            .iter()
            .fold(Self::default(), |mut stat, decl| {
                stat.record(decl);
                stat
            })
    }

    fn record(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Function { .. } => self.functions += 1,
            Declaration::Type { exported, kind, .. } => {
                self.all_types += 1;
                if *exported && *kind == TypeKind::Contract {
                    self.contract_types += 1;
                }
            }
            Declaration::Constant { .. } => self.constants += 1,
            Declaration::Variable { .. } => self.variables += 1,
            Declaration::Other { .. } | Declaration::Unrecognized => self.other += 1,
        }
    }

    /// Number of declarations; contract types are already inside `all_types`
    pub fn total(&self) -> i64 {
        self.functions + self.all_types + self.constants + self.variables + self.other
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl AddAssign for DeclStat {
    fn add_assign(&mut self, rhs: Self) {
        self.functions += rhs.functions;
        self.all_types += rhs.all_types;
        self.contract_types += rhs.contract_types;
        self.constants += rhs.constants;
        self.variables += rhs.variables;
        self.other += rhs.other;
    }
}

impl SubAssign for DeclStat {
    fn sub_assign(&mut self, rhs: Self) {
        self.functions -= rhs.functions;
        self.all_types -= rhs.all_types;
        self.contract_types -= rhs.contract_types;
        self.constants -= rhs.constants;
        self.variables -= rhs.variables;
        self.other -= rhs.other;
    }
}

impl Add for DeclStat {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for DeclStat {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl std::iter::Sum for DeclStat {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
