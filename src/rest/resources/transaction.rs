//! Order transactions: authorizations, captures, sales, voids and refunds
//! recorded against one order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{self, CountOptions, GetOptions, ListOptions, ResourceError, RestResource};

/// The kind of payment operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money reserved on the customer's payment method.
    Authorization,
    /// Transfer of previously authorized money.
    Capture,
    /// Authorization and capture in one step.
    Sale,
    /// Cancellation of a pending authorization or capture.
    Void,
    Refund,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Failure,
    Success,
    Error,
}

/// A transaction on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,

    /// Decimal amount in `currency`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// Gateway authorization code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// The transaction this one settles, e.g. the authorization of a capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Gateway-specific receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Value>,
}

impl RestResource for Transaction {
    const KEY: &'static str = "transaction";
    const PLURAL: &'static str = "transactions";
    type ListOptions = ListOptions;
}

/// Transaction endpoints of one order.
#[derive(Debug, Clone, Copy)]
pub struct TransactionService<'a> {
    client: &'a RestClient,
    order_id: u64,
}

impl<'a> TransactionService<'a> {
    #[must_use]
    pub const fn new(client: &'a RestClient, order_id: u64) -> Self {
        Self { client, order_id }
    }

    /// The order whose transactions this service addresses.
    #[must_use]
    pub const fn order_id(&self) -> u64 {
        self.order_id
    }

    fn base_path(&self) -> String {
        format!("orders/{}/transactions", self.order_id)
    }

    /// The order's transactions. The endpoint is not paginated.
    ///
    /// # Errors
    ///
    /// See [`rest::list`].
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Transaction>, ResourceError> {
        rest::list(self.client, &self.base_path(), options).await
    }

    /// # Errors
    ///
    /// See [`rest::count`].
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        rest::count(self.client, &format!("{}/count", self.base_path()), options).await
    }

    /// # Errors
    ///
    /// See [`rest::get`].
    pub async fn get(
        &self,
        transaction_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<Transaction, ResourceError> {
        rest::get(
            self.client,
            &format!("{}/{transaction_id}", self.base_path()),
            options,
        )
        .await
    }

    /// Records a transaction, e.g. a capture of an earlier authorization.
    ///
    /// # Errors
    ///
    /// See [`rest::create`].
    pub async fn create(&self, transaction: &Transaction) -> Result<Transaction, ResourceError> {
        rest::create(self.client, &self.base_path(), transaction).await
    }
}

impl RestClient {
    /// Transaction endpoints of order `order_id`.
    #[must_use]
    pub const fn transactions(&self, order_id: u64) -> TransactionService<'_> {
        TransactionService::new(self, order_id)
    }
}
