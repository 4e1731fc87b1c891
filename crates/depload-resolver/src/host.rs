//! Contracts the engine consumes from the module-loading host.

use depload_core::module::ModuleId;
use depload_core::reference::AssemblyReference;

/// Reads the assembly references a module declares.
pub trait ReferenceEnumerator {
    /// References of `module` in declaration order.
    fn assembly_refs(&self, module: ModuleId) -> Vec<AssemblyReference>;

    /// Human-readable label for logs and reports.
    fn describe(&self, module: ModuleId) -> String {
        module.to_string()
    }
}

/// Locates and loads the module an assembly reference points at.
///
/// Must be safe to call repeatedly with the same arguments. Already loaded
/// modules must keep their identity across calls.
pub trait AssemblyResolver {
    /// `Ok(None)` means the reference could not be located.
    fn resolve(
        &mut self,
        reference: &AssemblyReference,
        requesting: ModuleId,
    ) -> miette::Result<Option<ModuleId>>;

    /// Total modules the host has loaded so far, if it keeps count.
    fn loaded_count(&self) -> Option<usize> {
        None
    }
}

/// A host able to both enumerate and resolve references.
pub trait ModuleHost: ReferenceEnumerator + AssemblyResolver {}

impl<T: ReferenceEnumerator + AssemblyResolver> ModuleHost for T {}
