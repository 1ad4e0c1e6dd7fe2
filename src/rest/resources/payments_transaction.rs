//! Shopify Payments balance transactions.
//!
//! Each entry moves money into or out of the Shopify Payments balance and
//! belongs to at most one payout.

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::options::page_options;
use crate::rest::{self, GetOptions, ListAllError, Pagination, ResourceError, RestResource};

use super::common::OnlyDate;
use super::payout::PayoutStatus;

const PAYMENTS_TRANSACTIONS_BASE_PATH: &str = "shopify_payments/balance/transactions";

/// What caused a balance transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentsTransactionType {
    Charge,
    Refund,
    Dispute,
    Reserve,
    Adjustment,
    Credit,
    Debit,
    Payout,
    PayoutFailure,
    PayoutCancellation,
}

/// A Shopify Payments balance transaction.
///
/// Amounts are decimal strings in `currency`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentsTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<PaymentsTransactionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_status: Option<PayoutStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Gross amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,

    /// `amount` less `fee`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<u64>,

    /// e.g. `charge`, `refund`, `dispute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_order_transaction_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_order_id: Option<u64>,

    /// Accepts a plain date or a full timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<OnlyDate>,
}

impl RestResource for PaymentsTransaction {
    const KEY: &'static str = "transaction";
    const PLURAL: &'static str = "transactions";
    type ListOptions = PaymentsTransactionListOptions;
}

/// Options for listing balance transactions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentsTransactionListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Only transactions paid out in this payout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_status: Option<PayoutStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_min: Option<OnlyDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_max: Option<OnlyDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<OnlyDate>,
}

page_options!(PaymentsTransactionListOptions);

/// Balance transaction endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PaymentsTransactionService<'a> {
    client: &'a RestClient,
}

impl<'a> PaymentsTransactionService<'a> {
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// See [`rest::list`].
    pub async fn list(
        &self,
        options: Option<&PaymentsTransactionListOptions>,
    ) -> Result<Vec<PaymentsTransaction>, ResourceError> {
        rest::list(self.client, PAYMENTS_TRANSACTIONS_BASE_PATH, options).await
    }

    /// # Errors
    ///
    /// See [`rest::list_all`].
    pub async fn list_all(
        &self,
        options: Option<&PaymentsTransactionListOptions>,
    ) -> Result<Vec<PaymentsTransaction>, ListAllError<PaymentsTransaction>> {
        rest::list_all(self.client, PAYMENTS_TRANSACTIONS_BASE_PATH, options).await
    }

    /// # Errors
    ///
    /// See [`rest::list_with_pagination`].
    pub async fn list_with_pagination(
        &self,
        options: Option<&PaymentsTransactionListOptions>,
    ) -> Result<
        (
            Vec<PaymentsTransaction>,
            Pagination<PaymentsTransactionListOptions>,
        ),
        ResourceError,
    > {
        rest::list_with_pagination(self.client, PAYMENTS_TRANSACTIONS_BASE_PATH, options).await
    }

    /// # Errors
    ///
    /// See [`rest::get`].
    pub async fn get(
        &self,
        transaction_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<PaymentsTransaction, ResourceError> {
        rest::get(
            self.client,
            &format!("{PAYMENTS_TRANSACTIONS_BASE_PATH}/{transaction_id}"),
            options,
        )
        .await
    }
}

impl RestClient {
    /// Shopify Payments balance transaction endpoints.
    #[must_use]
    pub const fn payments_transactions(&self) -> PaymentsTransactionService<'_> {
        PaymentsTransactionService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_deserialization() {
        let transaction: PaymentsTransaction = serde_json::from_value(json!({
            "id": 699519475,
            "type": "debit",
            "test": false,
            "payout_id": 623721858,
            "payout_status": "paid",
            "currency": "USD",
            "amount": "-50.00",
            "fee": "0.00",
            "net": "-50.00",
            "source_id": 460709370,
            "source_type": "adjustment",
            "source_order_id": null,
            "source_order_transaction_id": null,
            "processed_at": "2013-11-01T12:00:00-04:00"
        }))
        .unwrap();

        assert_eq!(
            transaction.transaction_type,
            Some(PaymentsTransactionType::Debit)
        );
        assert_eq!(transaction.payout_status, Some(PayoutStatus::Paid));
        assert_eq!(transaction.processed_at, OnlyDate::from_ymd(2013, 11, 1));
        assert!(transaction.source_order_id.is_none());
    }

    #[test]
    fn test_transaction_rejects_malformed_processed_at() {
        let result = serde_json::from_value::<PaymentsTransaction>(
            json!({"id": 1, "processed_at": "20-02-2"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_transaction_type_wire_names() {
        for (kind, wire) in [
            (PaymentsTransactionType::PayoutFailure, "payout_failure"),
            (
                PaymentsTransactionType::PayoutCancellation,
                "payout_cancellation",
            ),
            (PaymentsTransactionType::Charge, "charge"),
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(wire));
        }
    }
}
