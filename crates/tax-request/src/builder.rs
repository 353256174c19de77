//! Maps an order snapshot onto a tax transaction request.

use chrono::{Local, NaiveDate};
use domain::{Adjustable, LineItem, Money, Shipment, TaxableOrder};

use crate::config::RequestConfig;
use crate::document::DocumentType;
use crate::payload::{
    AddressModel, LineAddresses, LineModel, TaxOverride, TaxRequest, TransactionModel,
};

/// The tax service rejects longer line descriptions.
const MAX_DESCRIPTION_LEN: usize = 255;

/// Per-request options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestOptions {
    /// Whether the service should finalize the transaction immediately.
    pub commit: bool,

    /// Document type; the configured default applies when absent.
    pub doc_type: Option<DocumentType>,
}

impl RequestOptions {
    /// Uncommitted request of the configured default type, as used for checkout estimates.
    pub fn estimate() -> Self {
        Self::default()
    }

    /// Committed request of the given type.
    pub fn committed(doc_type: DocumentType) -> Self {
        Self {
            commit: true,
            doc_type: Some(doc_type),
        }
    }

    pub fn with_doc_type(mut self, doc_type: DocumentType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }
}

/// Builds tax transaction requests from orders.
///
/// The builder holds only configuration; generating a request reads the order
/// and nothing else, so one builder can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TaxRequestBuilder {
    config: RequestConfig,
}

impl TaxRequestBuilder {
    /// Creates a builder with the given configuration.
    pub fn new(config: RequestConfig) -> Self {
        Self { config }
    }

    /// Returns the builder configuration.
    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Builds the request, dating incomplete orders with the local date.
    pub fn generate<O>(&self, order: &O, options: &RequestOptions) -> TaxRequest
    where
        O: TaxableOrder + ?Sized,
    {
        self.generate_on(order, options, Local::now().date_naive())
    }

    /// Builds the request with `today` as the date for incomplete orders.
    #[tracing::instrument(skip_all, fields(order_number = %order.number(), commit = options.commit))]
    pub fn generate_on<O>(&self, order: &O, options: &RequestOptions, today: NaiveDate) -> TaxRequest
    where
        O: TaxableOrder + ?Sized,
    {
        let document_type = self.config.document_type(options.doc_type);
        let date = document_date(order, today);
        let discount = discount_total(order);

        let lines: Vec<LineModel> = order
            .line_items()
            .iter()
            .map(|item| self.item_line(order, item))
            .chain(
                order
                    .shipments()
                    .iter()
                    .map(|shipment| self.shipment_line(order, shipment)),
            )
            .collect();

        metrics::counter!("tax_requests_generated_total", "document_type" => document_type.as_str())
            .increment(1);
        metrics::histogram!("tax_request_lines").record(lines.len() as f64);
        tracing::debug!(
            %document_type,
            %date,
            %discount,
            lines = lines.len(),
            "tax request generated"
        );

        TaxRequest {
            create_transaction_model: TransactionModel {
                code: order.number().to_string(),
                date,
                discount: discount.to_f64(),
                commit: options.commit,
                document_type,
                lines,
                customer_code: order.customer_code(),
                company_code: self.config.company_code.clone(),
                customer_usage_type: order.customer_usage_type().map(str::to_string),
                exemption_no: order.exemption_number().map(str::to_string),
                reference_code: order.number().to_string(),
                currency_code: order.currency().to_string(),
                business_identification_no: order.business_identification_no().map(str::to_string),
                tax_override: tax_override(order),
            },
        }
    }

    fn item_line<O>(&self, order: &O, item: &LineItem) -> LineModel
    where
        O: TaxableOrder + ?Sized,
    {
        LineModel {
            number: format!("{}-LI", item.id),
            description: item.name.chars().take(MAX_DESCRIPTION_LEN).collect(),
            tax_code: item
                .tax_code
                .clone()
                .unwrap_or_else(|| self.config.default_tax_code.clone()),
            item_code: item.sku.clone(),
            quantity: item.quantity,
            // Sent undiscounted; the header discount covers promotions.
            amount: item.amount().to_f64(),
            discounted: is_discounted(order, item),
            tax_included: false,
            addresses: line_addresses(order),
            customer_usage_type: order.customer_usage_type().map(str::to_string),
            business_identification_no: order.business_identification_no().map(str::to_string),
            exemption_code: order.exemption_number().map(str::to_string),
        }
    }

    fn shipment_line<O>(&self, order: &O, shipment: &Shipment) -> LineModel
    where
        O: TaxableOrder + ?Sized,
    {
        LineModel {
            number: format!("{}-FR", shipment.id),
            description: self.config.shipping_description.clone(),
            tax_code: self.config.freight_tax_code.clone(),
            item_code: shipment.shipping_method.clone(),
            quantity: 1,
            amount: order.shipment_amount(shipment).to_f64(),
            // The amount already carries shipping promotions.
            discounted: false,
            tax_included: false,
            addresses: line_addresses(order),
            customer_usage_type: order.customer_usage_type().map(str::to_string),
            business_identification_no: order.business_identification_no().map(str::to_string),
            exemption_code: order.exemption_number().map(str::to_string),
        }
    }
}

/// Sums eligible order and line item promotions.
///
/// Shipping promotions are excluded: the shipment line is sent at its
/// discounted amount, so counting them here would discount freight twice.
pub fn discount_total<O>(order: &O) -> Money
where
    O: TaxableOrder + ?Sized,
{
    order
        .all_adjustments()
        .iter()
        .filter(|adj| adj.is_eligible_promotion() && !adj.adjustable.is_shipment())
        .map(|adj| adj.amount)
        .sum::<Money>()
        .abs()
}

/// Completion date for completed orders, `today` otherwise.
pub fn document_date<O>(order: &O, today: NaiveDate) -> NaiveDate
where
    O: TaxableOrder + ?Sized,
{
    match order.completed_at() {
        Some(at) if order.is_completed() => at.date_naive(),
        _ => today,
    }
}

fn tax_override<O>(order: &O) -> Option<TaxOverride>
where
    O: TaxableOrder + ?Sized,
{
    if !order.is_completed() {
        return None;
    }
    order
        .completed_at()
        .map(|at| TaxOverride::completed_at(at.date_naive()))
}

/// A line item takes part in the header discount when a promotion applies to
/// it directly or to the whole order.
fn is_discounted<O>(order: &O, item: &LineItem) -> bool
where
    O: TaxableOrder + ?Sized,
{
    order.all_adjustments().iter().any(|adj| {
        adj.is_eligible_promotion()
            && match adj.adjustable {
                Adjustable::LineItem(id) => id == item.id,
                Adjustable::Order => true,
                Adjustable::Shipment(_) => false,
            }
    })
}

fn line_addresses<O>(order: &O) -> LineAddresses
where
    O: TaxableOrder + ?Sized,
{
    LineAddresses {
        ship_from: AddressModel::from(order.stock_location()),
        ship_to: AddressModel::from(order.ship_address()),
    }
}
