//! Declarative field validation for inbound payloads.
//!
//! Each input type carries a static table of field rules mapping internal
//! fields to their wire names. The error messages are part of the wire
//! contract: clients pattern-match on them, so the wording here must not
//! drift.

use crate::domain::{CategoryIn, CollectionIn, Error, Errors};

/// Constraint kinds a field rule can enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The field must be present and non-empty.
    Required,
    /// A named check evaluated by the rule's predicate.
    Tag(&'static str),
}

impl Constraint {
    fn tag(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Tag(tag) => tag,
        }
    }
}

/// One declarative constraint on a field of `T`.
pub struct FieldRule<T> {
    /// JSON key as the client supplies it.
    pub wire_name: &'static str,
    /// Constraint enforced on the field.
    pub constraint: Constraint,
    /// Returns true when the constraint is satisfied.
    pub is_satisfied: fn(&T) -> bool,
}

/// Input types that expose a static rule table.
pub trait ValidateInput: Sized {
    /// Type name used in the qualified path of constraint-violation messages.
    const TYPE_NAME: &'static str;

    /// Rules in declaration order; violations are reported in this order.
    fn rules() -> &'static [FieldRule<Self>];
}

/// Check `input` against its rule table.
///
/// Returns one error per violated rule, in rule-declaration order. A
/// `Required` violation's message is exactly the field's wire name; any
/// other violation reproduces the `Key: '…' Error:Field validation …`
/// wording clients already depend on.
pub fn validate<T: ValidateInput + 'static>(input: &T) -> Result<(), Errors> {
    let errors: Errors = T::rules()
        .iter()
        .filter(|rule| !(rule.is_satisfied)(input))
        .map(|rule| match rule.constraint {
            Constraint::Required => Error::required(rule.wire_name),
            Constraint::Tag(tag) => Error::other(format!(
                "Key: '{}.{}' Error:Field validation for '{}' failed on the '{}' tag",
                T::TYPE_NAME,
                rule.wire_name,
                rule.wire_name,
                tag,
            )),
        })
        .collect();
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Wrap a failure that is not a validation-failure collection as a single
/// `Other` error carrying its display text.
pub fn generic_failure(err: impl std::fmt::Display) -> Errors {
    vec![Error::other(err.to_string())]
}

impl ValidateInput for CategoryIn {
    const TYPE_NAME: &'static str = "CategoryIn";

    fn rules() -> &'static [FieldRule<Self>] {
        static RULES: [FieldRule<CategoryIn>; 1] = [FieldRule {
            wire_name: "name",
            constraint: Constraint::Required,
            is_satisfied: |input| !input.name.is_empty(),
        }];
        &RULES
    }
}

impl ValidateInput for CollectionIn {
    const TYPE_NAME: &'static str = "CollectionIn";

    fn rules() -> &'static [FieldRule<Self>] {
        static RULES: [FieldRule<CollectionIn>; 2] = [
            FieldRule {
                wire_name: "name",
                constraint: Constraint::Required,
                is_satisfied: |input| !input.name.is_empty(),
            },
            FieldRule {
                wire_name: "category",
                constraint: Constraint::Tag("nonzero"),
                is_satisfied: |input| input.category.map_or(true, |r| r.id != 0),
            },
        ];
        &RULES
    }
}
