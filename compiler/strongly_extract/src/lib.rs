//! Declaration extraction for the strongly generator.
//!
//! Turns the host compiler's raw feed into [`DeclarationContext`]s:
//!
//! 1. Bind attribute arguments into a declared [`Configuration`]
//! 2. Check the declared values and the `partial` modifier
//! 3. Merge over the defaults attribute and the baseline
//! 4. Check operator support for the merged backing kind
//! 5. Collect the namespace and the enclosing types
//!
//! An attribute argument the host could not resolve skips the declaration
//! silently. Every other finding is a warning and extraction proceeds.

mod attribute;
mod context;

pub use attribute::{configuration_from_attribute, PARAMETERS};
pub use context::{namespace_of, parent_types, DeclarationContext, ParentType};

use strongly_config::{
    check::{check_declared, check_supported, DEFAULTS_TARGET},
    merge, Configuration,
};
use strongly_diagnostic::{missing_partial, DiagnosticSink};
use strongly_ir::{AttributeTarget, RawAttribute, RawDeclaration};

/// Outcome of extracting one declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Extraction {
    Generate(DeclarationContext),
    /// An argument did not resolve. Nothing is generated or reported.
    Skipped,
}

impl Extraction {
    pub fn into_context(self) -> Option<DeclarationContext> {
        match self {
            Extraction::Generate(ctx) => Some(ctx),
            Extraction::Skipped => None,
        }
    }
}

/// Build the context for one declaration.
///
/// `defaults` is the configuration returned by [`extract_defaults`].
#[tracing::instrument(level = "debug", skip_all, fields(name = %declaration.name))]
pub fn extract(
    declaration: &RawDeclaration,
    defaults: Option<&Configuration>,
    sink: &mut impl DiagnosticSink,
) -> Extraction {
    let Some(declared) = configuration_from_attribute(&declaration.attribute) else {
        tracing::debug!("unresolved attribute argument, skipping");
        return Extraction::Skipped;
    };

    check_declared(&declared, &declaration.name, sink);
    if !declaration.is_partial {
        sink.report(missing_partial(declaration.span, &declaration.name));
    }

    let configuration = merge(&declared, defaults);
    check_supported(&configuration, &declaration.name, sink);

    let context = DeclarationContext {
        name: declaration.name.clone(),
        namespace: namespace_of(&declaration.ancestors),
        parents: parent_types(&declaration.ancestors),
        is_record: declaration.is_record,
        is_partial: declaration.is_partial,
        user_constructors: declaration.constructor_parameters.clone(),
        configuration,
        location: declaration.span,
    };
    tracing::trace!(
        configuration = ?context.configuration,
        parents = context.parents.len(),
        "extracted"
    );
    Extraction::Generate(context)
}

/// Find the assembly defaults.
///
/// Only attributes targeting [`AttributeTarget::Defaults`] are considered.
/// The first one whose arguments all resolved wins; its declared values
/// are checked. Returns the declared (unmerged) configuration.
#[tracing::instrument(level = "debug", skip_all, fields(count = attributes.len()))]
pub fn extract_defaults(
    attributes: &[RawAttribute],
    sink: &mut impl DiagnosticSink,
) -> Option<Configuration> {
    let defaults = attributes
        .iter()
        .filter(|attr| attr.target == AttributeTarget::Defaults)
        .find_map(configuration_from_attribute)?;

    check_declared(&defaults, DEFAULTS_TARGET, sink);
    Some(defaults)
}
