//! Structural compatibility: does a concrete type satisfy a contract?
//!
//! The analyzer treats the oracle's answer as ground truth. Front ends with
//! a real type checker can supply their own implementation; the method-set
//! oracle here covers inputs that describe types by their method sets.

use crate::core::{ConcreteType, ContractType, MethodSig};
use std::collections::HashSet;

/// How a concrete type is used when checked against a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receiver {
    /// A value of the type
    Value,
    /// A reference/pointer to the type
    Reference,
}

pub trait CompatibilityOracle: Sync {
    fn implements(&self, concrete: &ConcreteType, receiver: Receiver, contract: &ContractType)
        -> bool;
}

/// Satisfaction by method-set inclusion
///
/// A value exposes its value methods; a reference exposes value and
/// reference methods. A contract is satisfied when every required method
/// is present with an identical signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodSetOracle;

impl MethodSetOracle {
    fn method_set(concrete: &ConcreteType, receiver: Receiver) -> HashSet<&MethodSig> {
        let value = concrete.value_methods.iter();
        match receiver {
            Receiver::Value => value.collect(),
            Receiver::Reference => value.chain(concrete.reference_methods.iter()).collect(),
        }
    }
}

impl CompatibilityOracle for MethodSetOracle {
    fn implements(
        &self,
        concrete: &ConcreteType,
        receiver: Receiver,
        contract: &ContractType,
    ) -> bool {
        let available = Self::method_set(concrete, receiver);
        contract.methods.iter().all(|m| available.contains(m))
    }
}
