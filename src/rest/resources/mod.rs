//! Admin API resources.
//!
//! Each resource has an entity struct, a service borrowing the
//! [`RestClient`](crate::RestClient), and an accessor on the client:
//!
//! | Accessor | Path |
//! |---|---|
//! | `client.products()` | `products` |
//! | `client.product_listings()` | `product_listings` |
//! | `client.custom_collections()` | `custom_collections` |
//! | `client.smart_collections()` | `smart_collections` |
//! | `client.payouts()` | `shopify_payments/payouts` |
//! | `client.payments_transactions()` | `shopify_payments/balance/transactions` |
//! | `client.transactions(order_id)` | `orders/{order_id}/transactions` |
//! | `client.metafields()` | `metafields` |
//!
//! Products and both collection kinds also expose `metafields(owner_id)`.

mod common;
mod custom_collection;
mod metafield;
mod payments_transaction;
mod payout;
mod product;
mod product_listing;
mod smart_collection;
mod transaction;

pub use common::{CollectionListOptions, Image, InvalidDateError, OnlyDate, ProductOption, Variant};
pub use custom_collection::{CustomCollection, CustomCollectionService};
pub use metafield::{Metafield, MetafieldListOptions, MetafieldService};
pub use payments_transaction::{
    PaymentsTransaction, PaymentsTransactionListOptions, PaymentsTransactionService,
    PaymentsTransactionType,
};
pub use payout::{Payout, PayoutListOptions, PayoutService, PayoutStatus};
pub use product::{Product, ProductListOptions, ProductService, ProductStatus};
pub use product_listing::{ProductListing, ProductListingService};
pub use smart_collection::{Rule, SmartCollection, SmartCollectionService};
pub use transaction::{Transaction, TransactionKind, TransactionService, TransactionStatus};
