//! Message search.

use crate::query::Dimension;
use crate::query::handlers::exclusion::ExclusionFilter;
use crate::query::handlers::flag::{Condition, FlagFilter, Literal, SwitchFilter};
use crate::query::handlers::identity::{AnyOfFilter, Alternative, IdentityFilter};
use crate::query::handlers::range::DateRange;
use crate::query::handlers::text::BuyerText;
use crate::schema::OptionShape;
use crate::types::Occur;

const fn identity(option: &'static str, shape: OptionShape, field: &'static str) -> Dimension {
    Dimension::Identity(IdentityFilter {
        option,
        shape,
        field,
    })
}

const fn flag(option: &'static str, condition: Condition) -> Dimension {
    Dimension::Flag(FlagFilter {
        option,
        condition,
        when_true: Occur::Filter,
    })
}

const fn date_range(field: &'static str, options: [&'static str; 4]) -> Dimension {
    let [after, on_or_after, before, on_or_before] = options;
    Dimension::DateRange(DateRange {
        field,
        after,
        on_or_after,
        before,
        on_or_before,
    })
}

pub(super) static DIMENSIONS: &[Dimension] = &[
    identity("seller", OptionShape::Ref, "seller_id"),
    identity("product", OptionShape::RefList, "product_id"),
    identity("variant", OptionShape::RefList, "variant_id"),
    identity("message_type", OptionShape::RefList, "installment_type"),
    Dimension::AnyOf(AnyOfFilter {
        alternatives: &[
            Alternative {
                option: "any_of_products",
                field: "product_id",
            },
            Alternative {
                option: "any_of_variants",
                field: "variant_id",
            },
        ],
    }),
    Dimension::Exclusion(ExclusionFilter {
        option: "exclude_message",
        field: "id",
    }),
    flag("published", Condition::Exists("published_at")),
    flag("scheduled", Condition::Exists("scheduled_at")),
    flag("deleted", Condition::Exists("deleted_at")),
    flag("workflow", Condition::Exists("workflow_id")),
    flag(
        "shown_on_profile",
        Condition::Equals("shown_on_profile", Literal::Bool(true)),
    ),
    Dimension::Switch(SwitchFilter {
        option: "exclude_workflow_messages",
        condition: Condition::Exists("workflow_id"),
        occur: Occur::MustNot,
    }),
    date_range(
        "published_at",
        [
            "published_after",
            "published_on_or_after",
            "published_before",
            "published_on_or_before",
        ],
    ),
    date_range(
        "created_at",
        [
            "created_after",
            "created_on_or_after",
            "created_before",
            "created_on_or_before",
        ],
    ),
    Dimension::BuyerText(BuyerText {
        option: "query",
        fuzzy_fields: &["name", "message"],
    }),
];
