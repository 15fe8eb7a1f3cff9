//! The configuration record and its merge rules.

use strongly_ir::Span;

use crate::{BackingKind, BackingType, CapabilitySet, CastSet, ConverterSet, MathSet, Setting};

/// Settings carried by one attribute usage.
///
/// Produced by extraction in declared form (fields may be `Inherit`) and
/// by [`merge`] in resolved form (no `Inherit` left).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Configuration {
    pub backing_type: Setting<BackingType>,
    pub converters: Setting<ConverterSet>,
    pub capabilities: Setting<CapabilitySet>,
    pub casts: Setting<CastSet>,
    pub math: Setting<MathSet>,
    /// Where the attribute was written, for diagnostics.
    pub location: Option<Span>,
}

/// A configuration with every field concrete.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ResolvedConfiguration {
    pub backing_type: BackingType,
    pub converters: ConverterSet,
    pub capabilities: CapabilitySet,
    pub casts: CastSet,
    pub math: MathSet,
}

impl Configuration {
    /// Every field `Inherit`.
    pub const fn new() -> Self {
        Configuration {
            backing_type: Setting::Inherit,
            converters: Setting::Inherit,
            capabilities: Setting::Inherit,
            casts: Setting::Inherit,
            math: Setting::Inherit,
            location: None,
        }
    }

    /// Built-in fallback when neither the type nor the defaults specify a
    /// field.
    pub const fn baseline() -> Self {
        Configuration {
            backing_type: Setting::Value(BackingType::Known(BackingKind::Guid)),
            converters: Setting::Value(
                ConverterSet::TYPE_CONVERTER.union(ConverterSet::SYSTEM_TEXT_JSON),
            ),
            capabilities: Setting::Value(
                CapabilitySet::PARSABLE
                    .union(CapabilitySet::EQUATABLE)
                    .union(CapabilitySet::COMPARABLE)
                    .union(CapabilitySet::FORMATTABLE),
            ),
            casts: Setting::Value(CastSet::empty()),
            math: Setting::Value(MathSet::empty()),
            location: None,
        }
    }

    #[must_use]
    pub fn with_backing(self, kind: BackingKind) -> Self {
        self.with_backing_type(BackingType::Known(kind))
    }

    #[must_use]
    pub fn with_backing_type(mut self, backing_type: BackingType) -> Self {
        self.backing_type = Setting::Value(backing_type);
        self
    }

    #[must_use]
    pub fn with_converters(mut self, converters: ConverterSet) -> Self {
        self.converters = Setting::Value(converters);
        self
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: CapabilitySet) -> Self {
        self.capabilities = Setting::Value(capabilities);
        self
    }

    #[must_use]
    pub fn with_casts(mut self, casts: CastSet) -> Self {
        self.casts = Setting::Value(casts);
        self
    }

    #[must_use]
    pub fn with_math(mut self, math: MathSet) -> Self {
        self.math = Setting::Value(math);
        self
    }

    #[must_use]
    pub fn with_location(mut self, span: Span) -> Self {
        self.location = Some(span);
        self
    }

    /// The all-concrete view, if no field inherits.
    pub fn resolved(&self) -> Option<ResolvedConfiguration> {
        Some(ResolvedConfiguration {
            backing_type: self.backing_type.value()?,
            converters: self.converters.value()?,
            capabilities: self.capabilities.value()?,
            casts: self.casts.value()?,
            math: self.math.value()?,
        })
    }

    /// The backing kind, if concrete and declared.
    pub fn backing_kind(&self) -> Option<BackingKind> {
        self.backing_type.value().and_then(BackingType::kind)
    }
}

/// Fold `declared` over the defaults attribute and the baseline.
///
/// Per field: a concrete declared value is kept verbatim; `Inherit` takes
/// `global`'s value, which falls back to [`Configuration::baseline`] when
/// `global` is absent or inherits too. The result never inherits. The
/// declared location is kept.
pub fn merge(declared: &Configuration, global: Option<&Configuration>) -> Configuration {
    let global = global.copied().unwrap_or_default();
    let baseline = Configuration::baseline();

    Configuration {
        backing_type: declared
            .backing_type
            .or(global.backing_type)
            .or(baseline.backing_type),
        converters: declared
            .converters
            .or(global.converters)
            .or(baseline.converters),
        capabilities: declared
            .capabilities
            .or(global.capabilities)
            .or(baseline.capabilities),
        casts: declared.casts.or(global.casts).or(baseline.casts),
        math: declared.math.or(global.math).or(baseline.math),
        location: declared.location,
    }
}
