//! Purchase search, as run from the seller dashboard.

use crate::query::Dimension;
use crate::query::handlers::exclusion::ExclusionFilter;
use crate::query::handlers::flag::{Condition, FlagFilter, Literal, SwitchFilter};
use crate::query::handlers::identity::{AnyOfFilter, Alternative, IdentityFilter};
use crate::query::handlers::range::{DateRange, NumericRange};
use crate::query::handlers::text::SellerText;
use crate::schema::OptionShape;
use crate::types::Occur;

const fn identity(option: &'static str, shape: OptionShape, field: &'static str) -> Dimension {
    Dimension::Identity(IdentityFilter {
        option,
        shape,
        field,
    })
}

const fn exclusion(option: &'static str, field: &'static str) -> Dimension {
    Dimension::Exclusion(ExclusionFilter { option, field })
}

const fn flag(option: &'static str, condition: Condition, when_true: Occur) -> Dimension {
    Dimension::Flag(FlagFilter {
        option,
        condition,
        when_true,
    })
}

const fn exclude_when(option: &'static str, condition: Condition) -> Dimension {
    Dimension::Switch(SwitchFilter {
        option,
        condition,
        occur: Occur::MustNot,
    })
}

pub(super) static DIMENSIONS: &[Dimension] = &[
    identity("seller", OptionShape::Ref, "seller_id"),
    identity("purchaser", OptionShape::Ref, "purchaser_id"),
    identity("affiliate_user", OptionShape::Ref, "affiliate_user_id"),
    identity("product", OptionShape::RefList, "product_id"),
    identity("variant", OptionShape::RefList, "variant_ids"),
    identity("taxonomy", OptionShape::RefList, "taxonomy_id"),
    identity("country", OptionShape::RefList, "country_or_ip_country"),
    identity("state", OptionShape::RefList, "purchase_state"),
    Dimension::AnyOf(AnyOfFilter {
        alternatives: &[
            Alternative {
                option: "any_of_products",
                field: "product_id",
            },
            Alternative {
                option: "any_of_variants",
                field: "variant_ids",
            },
        ],
    }),
    exclusion("exclude_product", "product_id"),
    exclusion("exclude_variant", "variant_ids"),
    exclusion("exclude_purchaser", "purchaser_id"),
    flag(
        "archived",
        Condition::Equals("is_archived", Literal::Bool(true)),
        Occur::Filter,
    ),
    flag(
        "recommended",
        Condition::Equals("is_recommended", Literal::Bool(true)),
        Occur::Filter,
    ),
    flag(
        "refunded",
        Condition::Equals("flags", Literal::Str("refunded")),
        Occur::Filter,
    ),
    flag(
        "preorder",
        Condition::Equals("flags", Literal::Str("preorder")),
        Occur::Filter,
    ),
    flag(
        "chargedback",
        Condition::Exists("chargedback_at"),
        Occur::Filter,
    ),
    // A licensed purchase is also a relevance signal.
    flag("licensed", Condition::Exists("license_serial"), Occur::Must),
    exclude_when("exclude_giftees", Condition::Exists("gift_giver_purchase_id")),
    exclude_when("exclude_bundle_items", Condition::Exists("bundle_purchase_id")),
    exclude_when(
        "exclude_commission_completions",
        Condition::Equals("flags", Literal::Str("commission_completion")),
    ),
    Dimension::NumericRange(NumericRange {
        field: "price_cents",
        greater_than: "price_greater_than",
        less_than: "price_less_than",
    }),
    Dimension::DateRange(DateRange {
        field: "created_at",
        after: "created_after",
        on_or_after: "created_on_or_after",
        before: "created_before",
        on_or_before: "created_on_or_before",
    }),
    Dimension::SellerText(SellerText {
        option: "seller_query",
        phrase_field: "full_name",
        fuzzy_fields: &["full_name", "product_name", "email"],
        email_fields: &["email.raw", "paypal_email.raw"],
        serial_field: "license_serial",
    }),
];
