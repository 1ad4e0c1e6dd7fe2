//! Shopify Payments payouts.

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::options::page_options;
use crate::rest::{self, GetOptions, ListAllError, Pagination, ResourceError, RestResource};

use super::common::OnlyDate;

const PAYOUTS_BASE_PATH: &str = "shopify_payments/payouts";

/// Transfer state of a payout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Scheduled,
    InTransit,
    Paid,
    Failed,
    Cancelled,
}

/// A transfer of Shopify Payments funds to the merchant's bank account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Payout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Day the payout was issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<OnlyDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Decimal amount, e.g. `"43.12"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,
}

impl RestResource for Payout {
    const KEY: &'static str = "payout";
    const PLURAL: &'static str = "payouts";
    type ListOptions = PayoutListOptions;
}

/// Options for listing payouts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PayoutListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Only payouts before this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u64>,

    /// Only payouts after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Only payouts with this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_min: Option<OnlyDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_max: Option<OnlyDate>,

    /// Only payouts issued on this day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<OnlyDate>,
}

page_options!(PayoutListOptions);

/// Payout endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PayoutService<'a> {
    client: &'a RestClient,
}

impl<'a> PayoutService<'a> {
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// First page of payouts, most recent first.
    ///
    /// # Errors
    ///
    /// See [`rest::list`].
    pub async fn list(
        &self,
        options: Option<&PayoutListOptions>,
    ) -> Result<Vec<Payout>, ResourceError> {
        rest::list(self.client, PAYOUTS_BASE_PATH, options).await
    }

    /// Every payout, following pagination.
    ///
    /// # Errors
    ///
    /// See [`rest::list_all`].
    pub async fn list_all(
        &self,
        options: Option<&PayoutListOptions>,
    ) -> Result<Vec<Payout>, ListAllError<Payout>> {
        rest::list_all(self.client, PAYOUTS_BASE_PATH, options).await
    }

    /// One page of payouts with its pagination handle.
    ///
    /// # Errors
    ///
    /// See [`rest::list_with_pagination`].
    pub async fn list_with_pagination(
        &self,
        options: Option<&PayoutListOptions>,
    ) -> Result<(Vec<Payout>, Pagination<PayoutListOptions>), ResourceError> {
        rest::list_with_pagination(self.client, PAYOUTS_BASE_PATH, options).await
    }

    /// A single payout.
    ///
    /// # Errors
    ///
    /// See [`rest::get`].
    pub async fn get(
        &self,
        payout_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<Payout, ResourceError> {
        rest::get(
            self.client,
            &format!("{PAYOUTS_BASE_PATH}/{payout_id}"),
            options,
        )
        .await
    }
}

impl RestClient {
    /// Shopify Payments payout endpoints.
    #[must_use]
    pub const fn payouts(&self) -> PayoutService<'_> {
        PayoutService::new(self)
    }
}
