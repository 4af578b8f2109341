pub mod errors;
pub mod module_set;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use module_set::ModuleSet;
pub use types::{
    ConcreteType, ContractType, Declaration, MethodSig, Module, ModuleId, TypeInfo, TypeKind,
};
