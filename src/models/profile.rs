// src/models/profile.rs - Company profile, banking, KYC, and terms

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub account_holder: String,
    #[serde(default)]
    pub iban: String,
    #[serde(default)]
    pub swift: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerProfile {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country_id: Option<u64>,
    #[serde(default)]
    pub currency_id: Option<u64>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub bank: BankDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycState {
    NotSubmitted,
    Pending,
    Approved,
    Rejected,
}

impl KycState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotSubmitted => "Not submitted",
            Self::Pending => "Under review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// `GET /seller/profile/kyc-status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycStatus {
    pub status: KycState,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// `GET /seller/profile/terms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermsStatus {
    pub accepted: bool,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
