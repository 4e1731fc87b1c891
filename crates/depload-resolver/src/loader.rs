//! The dependency loader: immediate and transitive module loading.
//!
//! The transitive walk is depth-first in reference-declaration order. A
//! module joins the visited set before any of its references are examined,
//! so self references, mutual cycles and diamonds are each traversed once.

use std::vec;

use depload_core::framework::FrameworkClassifier;
use depload_core::module::ModuleId;
use depload_core::reference::AssemblyReference;

use crate::cache::VisitedSet;
use crate::host::{AssemblyResolver, ModuleHost};
use crate::outcome::{ReferenceOutcome, ResolvedDependency};
use crate::report::LoadReport;

/// Classifier context passed during transitive loading.
const NO_CONTEXT: &str = "";

/// One module whose references are still being walked.
struct Frame {
    module: ModuleId,
    refs: vec::IntoIter<AssemblyReference>,
}

/// Resolves the dependencies of a root module through a [`ModuleHost`].
#[derive(Debug, Clone, Default)]
pub struct DependencyLoader<C> {
    classifier: C,
}

impl<C: FrameworkClassifier> DependencyLoader<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Resolve every reference declared directly on `root`, in order.
    ///
    /// No classification is applied: framework references are resolved too.
    /// Nothing is recursed into, and unresolved references are reported but
    /// otherwise ignored.
    pub fn load_immediate<H: ModuleHost>(
        &self,
        host: &mut H,
        root: ModuleId,
    ) -> Vec<ReferenceOutcome> {
        let refs = host.assembly_refs(root);
        tracing::debug!(
            "Loading {} immediate references of {}",
            refs.len(),
            host.describe(root)
        );

        refs.into_iter()
            .map(|reference| {
                let outcome = resolve_one(host, &reference, root);
                ReferenceOutcome {
                    requesting: root,
                    reference,
                    outcome,
                }
            })
            .collect()
    }

    /// Load the transitive closure of non-framework dependencies of `root`.
    ///
    /// The returned report's visited set contains `root` and every module
    /// reached from it. Each module is visited at most once per call.
    pub fn load_all_transitive<H: ModuleHost>(&self, host: &mut H, root: ModuleId) -> LoadReport {
        let mut visited = VisitedSet::new();
        let mut outcomes = Vec::new();
        let mut stack = Vec::new();
        let loaded_before = host.loaded_count();

        visited.visit(root);
        stack.push(Frame {
            module: root,
            refs: host.assembly_refs(root).into_iter(),
        });

        while let Some(frame) = stack.last_mut() {
            let Some(reference) = frame.refs.next() else {
                stack.pop();
                continue;
            };
            let requesting = frame.module;

            if self
                .classifier
                .is_framework_assembly(NO_CONTEXT, &reference.name)
            {
                tracing::debug!("Skipping framework reference {reference}");
                outcomes.push(ReferenceOutcome {
                    requesting,
                    reference,
                    outcome: ResolvedDependency::Framework,
                });
                continue;
            }

            let outcome = resolve_one(host, &reference, requesting);
            let target = outcome.module();
            outcomes.push(ReferenceOutcome {
                requesting,
                reference,
                outcome,
            });

            let Some(target) = target else {
                continue;
            };
            if !visited.visit(target) {
                tracing::trace!("{} already visited", host.describe(target));
                continue;
            }
            tracing::debug!("Visiting {}", host.describe(target));
            stack.push(Frame {
                module: target,
                refs: host.assembly_refs(target).into_iter(),
            });
        }

        // hosts without a load counter: every module reached past the root counts
        let newly_loaded = match (loaded_before, host.loaded_count()) {
            (Some(before), Some(after)) => after.saturating_sub(before),
            _ => visited.len().saturating_sub(1),
        };
        let report = LoadReport::new(root, visited, outcomes, newly_loaded);
        tracing::info!(
            "Reached {} modules from {}, {} newly loaded ({} framework skipped, {} unresolved)",
            report.len(),
            host.describe(root),
            report.newly_loaded(),
            report.framework_count(),
            report.unresolved().count()
        );
        report
    }
}

fn resolve_one<H: AssemblyResolver + ?Sized>(
    host: &mut H,
    reference: &AssemblyReference,
    requesting: ModuleId,
) -> ResolvedDependency {
    match host.resolve(reference, requesting) {
        Ok(Some(module)) => ResolvedDependency::Resolved { module },
        Ok(None) => {
            tracing::debug!("Could not resolve {reference}");
            ResolvedDependency::Unresolved { error: None }
        }
        Err(e) => {
            tracing::warn!("Failed to resolve {reference}: {e}");
            ResolvedDependency::Unresolved {
                error: Some(e.to_string()),
            }
        }
    }
}
