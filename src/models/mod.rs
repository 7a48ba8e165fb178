// src/models/mod.rs - Domain types mirrored from the seller REST API

pub mod auth;
pub mod coupon;
pub mod customer;
pub mod inventory;
pub mod order;
pub mod product;
pub mod profile;
pub mod promotion;
pub mod reference;
pub mod team;

pub use auth::{Credentials, RegisterForm, SellerUser, Session};
pub use coupon::{format_email_list, parse_email_list, Coupon};
pub use customer::Customer;
pub use inventory::InventoryItem;
pub use order::{Order, OrderItem, OrderKpi, OrderStatus};
pub use product::{
    set_default_variant, Product, ProductStatus, Variant, VariantImage, VariantStatus,
};
pub use profile::{BankDetails, KycState, KycStatus, SellerProfile, TermsStatus};
pub use promotion::{Promotion, PromotionConditions, PromotionScope, PromotionStatus};
pub use reference::{Brand, Category, Color, Country, Currency, Size, Style, Subcategory};
pub use team::{group_permissions, MemberStatus, Role, TeamMember};
