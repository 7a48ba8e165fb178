// src/ui/components/badge.rs - Status pills for table rows

use dioxus::prelude::*;

use crate::models::{KycState, MemberStatus, OrderStatus, ProductStatus, PromotionStatus, VariantStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Yellow,
    Blue,
    Red,
    Gray,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            Self::Green => "bg-green-100 text-green-800",
            Self::Yellow => "bg-yellow-100 text-yellow-800",
            Self::Blue => "bg-blue-100 text-blue-800",
            Self::Red => "bg-red-100 text-red-800",
            Self::Gray => "bg-gray-100 text-gray-800",
        }
    }
}

pub trait IntoBadge {
    fn badge(&self) -> (&'static str, BadgeTone);
}

impl IntoBadge for ProductStatus {
    fn badge(&self) -> (&'static str, BadgeTone) {
        let tone = match self {
            Self::Active => BadgeTone::Green,
            Self::Draft => BadgeTone::Gray,
            Self::Archived => BadgeTone::Yellow,
        };
        (self.label(), tone)
    }
}

impl IntoBadge for VariantStatus {
    fn badge(&self) -> (&'static str, BadgeTone) {
        let tone = match self {
            Self::InStock => BadgeTone::Green,
            Self::OutOfStock => BadgeTone::Red,
            Self::ComingSoon => BadgeTone::Blue,
            Self::Archived => BadgeTone::Gray,
        };
        (self.label(), tone)
    }
}

impl IntoBadge for OrderStatus {
    fn badge(&self) -> (&'static str, BadgeTone) {
        let tone = match self {
            Self::Pending => BadgeTone::Yellow,
            Self::Processing => BadgeTone::Blue,
            Self::Shipped => BadgeTone::Blue,
            Self::Delivered => BadgeTone::Green,
            Self::Cancelled => BadgeTone::Gray,
            Self::Refunded => BadgeTone::Red,
        };
        (self.label(), tone)
    }
}

impl IntoBadge for PromotionStatus {
    fn badge(&self) -> (&'static str, BadgeTone) {
        let tone = match self {
            Self::Active => BadgeTone::Green,
            Self::Draft => BadgeTone::Gray,
            Self::Disabled => BadgeTone::Yellow,
            Self::Expired => BadgeTone::Red,
        };
        (self.label(), tone)
    }
}

impl IntoBadge for MemberStatus {
    fn badge(&self) -> (&'static str, BadgeTone) {
        let tone = match self {
            Self::Active => BadgeTone::Green,
            Self::Inactive => BadgeTone::Gray,
        };
        (self.label(), tone)
    }
}

impl IntoBadge for KycState {
    fn badge(&self) -> (&'static str, BadgeTone) {
        let tone = match self {
            Self::Approved => BadgeTone::Green,
            Self::Pending => BadgeTone::Yellow,
            Self::Rejected => BadgeTone::Red,
            Self::NotSubmitted => BadgeTone::Gray,
        };
        (self.label(), tone)
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatusBadgeProps {
    pub label: String,
    pub tone: BadgeTone,
}

#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {props.tone.class()}",
            "{props.label}"
        }
    }
}

/// Renders the badge for any status enum that maps into one.
pub fn status_badge(status: &impl IntoBadge) -> Element {
    let (label, tone) = status.badge();
    rsx! {
        StatusBadge { label: label.to_string(), tone }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_tones() {
        assert_eq!(OrderStatus::Delivered.badge(), ("Delivered", BadgeTone::Green));
        assert_eq!(OrderStatus::Refunded.badge(), ("Refunded", BadgeTone::Red));
    }

    #[test]
    fn test_product_status_tones() {
        assert_eq!(ProductStatus::Active.badge().1, BadgeTone::Green);
        assert_eq!(ProductStatus::Draft.badge().1, BadgeTone::Gray);
    }
}
