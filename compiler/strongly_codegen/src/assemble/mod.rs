//! Building one wrapper type from its bundle.
//!
//! The emission order is fixed: header, namespace and parents, attribute
//! markers, type declaration, base members, interface fragments,
//! converters, casts, operators, then closing braces.

use smallvec::SmallVec;
use strongly_config::{
    semantic::{effective_casts, effective_math},
    BackingType, CapabilitySet, CastSet, ConverterSet, MathSet, Setting,
};
use strongly_extract::DeclarationContext;
use strongly_templates::{
    fragments::{
        NEWTONSOFT_JSON_MARKER, SWAGGER_SCHEMA_FILTER_MARKER, SYSTEM_TEXT_JSON_MARKER,
        TYPE_CONVERTER_MARKER,
    },
    TemplateBundle, LEAF_SLOTS,
};

use crate::{render, AssembleError, SlotMap, SourceWriter};

/// Validated inputs for one declaration.
struct Plan {
    bundle: &'static TemplateBundle,
    capabilities: CapabilitySet,
    converters: ConverterSet,
    casts: CastSet,
    math: MathSet,
    /// Math was set to something other than none, undeclared bits included.
    math_requested: bool,
}

/// Render the wrapper for `ctx`.
///
/// Text is appended to `scratch`, which is never cleared; the whole buffer
/// is returned. On failure nothing is appended.
#[tracing::instrument(level = "debug", skip_all, fields(name = %ctx.name))]
pub fn assemble(ctx: &DeclarationContext, scratch: &mut String) -> Result<String, AssembleError> {
    let plan = plan(ctx)?;
    tracing::debug!(
        kind = %plan.bundle.kind,
        record = ctx.is_record,
        parents = ctx.parents.len(),
        "assembling"
    );

    let slots = slot_map(ctx, plan.bundle, plan.capabilities);
    let before = scratch.len();
    emit(&mut SourceWriter::new(scratch), ctx, &plan, &slots);
    tracing::trace!(bytes = scratch.len() - before, "emitted");

    Ok(scratch.clone())
}

fn plan(ctx: &DeclarationContext) -> Result<Plan, AssembleError> {
    let invalid = |reason| AssembleError::InvalidInput {
        name: ctx.name.clone(),
        reason,
    };
    let unsupported = |backing| AssembleError::UnsupportedBackingKind {
        name: ctx.name.clone(),
        backing,
    };

    if ctx.name.is_empty() {
        return Err(invalid("type name is empty"));
    }
    let config = &ctx.configuration;
    let capabilities = config
        .capabilities
        .value()
        .ok_or_else(|| invalid("implementations are unresolved"))?;
    let converters = config
        .converters
        .value()
        .ok_or_else(|| invalid("converters are unresolved"))?;
    let kind = match config.backing_type {
        Setting::Value(BackingType::Known(kind)) => kind,
        Setting::Value(BackingType::Unknown(raw)) => {
            return Err(unsupported(format!("backing type {raw}")));
        }
        Setting::Inherit => return Err(unsupported("an unresolved backing type".to_owned())),
    };

    Ok(Plan {
        bundle: strongly_templates::bundle(kind),
        capabilities,
        converters,
        casts: effective_casts(kind, config.casts),
        math: effective_math(kind, config.math),
        math_requested: config.math.value().is_some_and(|math| !math.is_empty()),
    })
}

/// Leaf slots for this declaration, then every bundle slot rendered
/// against them.
fn slot_map(
    ctx: &DeclarationContext,
    bundle: &TemplateBundle,
    capabilities: CapabilitySet,
) -> SlotMap {
    let nullable_value = bundle.supports_nullable_annotations;
    let (interfaces, interfaces_net7) = interface_lists(&ctx.name, capabilities, ctx.is_record);

    let mut slots = SlotMap::new();
    slots.insert("type_name", ctx.name.as_str());
    slots.insert("base_type", bundle.primitive);
    slots.insert("nullable", if nullable_value { "?" } else { "" });
    slots.insert(
        "hash_code",
        if nullable_value {
            "Value?.GetHashCode() ?? 0"
        } else {
            "Value.GetHashCode()"
        },
    );
    slots.insert("interfaces", interfaces);
    slots.insert("interfaces_net7", interfaces_net7);
    slots.insert("record_parameter", format!("{} Value", bundle.primitive));
    debug_assert!(LEAF_SLOTS.iter().all(|slot| slots.contains(slot)));

    let resolved: Vec<(&'static str, String)> = bundle
        .slots()
        .map(|(slot, value)| (slot, render(value, &slots)))
        .collect();
    for (slot, value) in resolved {
        slots.insert(slot, value);
    }
    slots
}

/// Base lists for older runtimes and for .NET 7+, each with its own
/// leading `" : "` or empty.
fn interface_lists(
    type_name: &str,
    capabilities: CapabilitySet,
    is_record: bool,
) -> (String, String) {
    let mut common: SmallVec<[String; 4]> = SmallVec::new();
    if capabilities.contains(CapabilitySet::COMPARABLE) {
        common.push(format!("System.IComparable<{type_name}>"));
    }
    // Record structs implement IEquatable<T> themselves.
    if capabilities.contains(CapabilitySet::EQUATABLE) && !is_record {
        common.push(format!("System.IEquatable<{type_name}>"));
    }
    if capabilities.contains(CapabilitySet::FORMATTABLE) {
        common.push("System.IFormattable".to_owned());
    }

    let mut net7 = common.clone();
    if capabilities.contains(CapabilitySet::PARSABLE) {
        net7.push(format!("System.IParsable<{type_name}>"));
    }
    (base_list(&common), base_list(&net7))
}

fn base_list(interfaces: &[String]) -> String {
    if interfaces.is_empty() {
        String::new()
    } else {
        format!(" : {}", interfaces.join(", "))
    }
}

fn emit(out: &mut SourceWriter<'_>, ctx: &DeclarationContext, plan: &Plan, slots: &SlotMap) {
    let bundle = plan.bundle;

    out.write_fragment(&render(bundle.header, slots));
    if bundle.supports_nullable_annotations {
        out.newline();
        out.writeln("#nullable enable");
    }
    out.newline();

    let has_namespace = !ctx.namespace.is_empty();
    if has_namespace {
        out.open_block(&format!("namespace {}", ctx.namespace));
    }
    for parent in &ctx.parents {
        out.open_block(&parent.header());
    }

    for marker in markers(plan.converters) {
        out.write_fragment(&render(marker, slots));
    }
    let declaration = if ctx.is_record {
        bundle.skeleton.record_declaration
    } else {
        bundle.skeleton.declaration
    };
    out.open_block(&render(declaration, slots));
    for member in members(ctx, plan) {
        out.write_member(&render(member, slots));
    }
    out.close_block();

    for _ in &ctx.parents {
        out.close_block();
    }
    if has_namespace {
        out.close_block();
    }
}

fn markers(converters: ConverterSet) -> impl Iterator<Item = &'static str> {
    [
        (ConverterSet::NEWTONSOFT_JSON, NEWTONSOFT_JSON_MARKER),
        (ConverterSet::SYSTEM_TEXT_JSON, SYSTEM_TEXT_JSON_MARKER),
        (ConverterSet::TYPE_CONVERTER, TYPE_CONVERTER_MARKER),
        (ConverterSet::SWAGGER_SCHEMA_FILTER, SWAGGER_SCHEMA_FILTER_MARKER),
    ]
    .into_iter()
    .filter(move |(flag, _)| converters.contains(*flag))
    .map(|(_, marker)| marker)
}

/// Member fragments in emission order. May contain `""`.
fn members(ctx: &DeclarationContext, plan: &Plan) -> Vec<&'static str> {
    let bundle = plan.bundle;
    let skeleton = &bundle.skeleton;
    let mut members = Vec::with_capacity(32);

    if ctx.is_record {
        // The positional parameter supplies the property, constructor and
        // equality members.
        members.extend_from_slice(skeleton.members);
        members.push(skeleton.to_string);
    } else {
        members.push(skeleton.value_property);
        if !has_user_constructor(ctx, bundle.primitive) {
            members.push(skeleton.constructor);
        }
        members.push(skeleton.default_constructor);
        members.extend_from_slice(skeleton.members);
        members.push(skeleton.equality);
        members.push(skeleton.to_string);
    }

    let capabilities = [
        (CapabilitySet::COMPARABLE, bundle.comparable),
        (CapabilitySet::FORMATTABLE, bundle.formattable),
        (CapabilitySet::PARSABLE, bundle.parsable),
    ];
    members.extend(
        capabilities
            .into_iter()
            .filter(|(flag, _)| plan.capabilities.contains(*flag))
            .map(|(_, text)| text),
    );

    let converters = [
        (ConverterSet::EF_VALUE_CONVERTER, bundle.ef_value_converter),
        (ConverterSet::DAPPER_TYPE_HANDLER, bundle.dapper_type_handler),
        (ConverterSet::TYPE_CONVERTER, bundle.type_converter),
        (ConverterSet::NEWTONSOFT_JSON, bundle.newtonsoft_json),
        (ConverterSet::SYSTEM_TEXT_JSON, bundle.system_text_json),
        (ConverterSet::SWAGGER_SCHEMA_FILTER, bundle.swagger_schema_filter),
    ];
    members.extend(
        converters
            .into_iter()
            .filter(|(flag, _)| plan.converters.contains(*flag))
            .map(|(_, text)| text),
    );

    let casts = [
        (CastSet::EXPLICIT_FROM, bundle.casts.explicit_from),
        (CastSet::EXPLICIT_TO, bundle.casts.explicit_to),
        (CastSet::IMPLICIT_FROM, bundle.casts.implicit_from),
        (CastSet::IMPLICIT_TO, bundle.casts.implicit_to),
    ];
    members.extend(
        casts
            .into_iter()
            .filter(|(flag, _)| plan.casts.contains(*flag))
            .map(|(_, text)| text),
    );

    if bundle.is_numeric && plan.math_requested {
        let math = bundle.math;
        members.push(math.constants);
        let operators = [
            (MathSet::ADDITION, math.addition),
            (MathSet::SUBTRACTION, math.subtraction),
            (MathSet::DIVISION, math.division),
            (MathSet::MULTIPLICATION, math.multiplication),
            (MathSet::NEGATION, math.negation),
            (MathSet::COMPARE, math.compare),
        ];
        members.extend(
            operators
                .into_iter()
                .filter(|(flag, _)| plan.math.contains(*flag))
                .map(|(_, text)| text),
        );
    } else if let Some(compare) = bundle
        .compare_operators
        .filter(|_| plan.math.contains(MathSet::COMPARE))
    {
        members.push(compare);
    }

    members
}

/// A user constructor over the primitive, spelled fully qualified or
/// without the `System.` prefix.
fn has_user_constructor(ctx: &DeclarationContext, primitive: &str) -> bool {
    ctx.has_constructor_for(primitive)
        || primitive
            .strip_prefix("System.")
            .is_some_and(|short| ctx.has_constructor_for(short))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
