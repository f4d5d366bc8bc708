//! The adjustment aggregate.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::domain::{
    entities::{
        hierarchy::HierarchyNode,
        records::{
            AdjustmentDescription, AdjustmentHeader, CustomerBusiness, ItemPrice,
            LocationBusiness, Parameter,
        },
        schedule::Schedule,
    },
    value_objects::NodeKind,
};

/// Parameter naming the country whose date format the run uses.
pub const COUNTRY_PARAMETER: &str = "Country";
/// Parameter holding the sheet category of an adjustment.
pub const CATEGORY_PARAMETER: &str = "PromoCategory";

/// One promotional pricing record.
///
/// Only `AdjustmentBuilder` constructs adjustments; once built they are read
/// through the accessors below and never change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    pub(crate) header: AdjustmentHeader,
    pub(crate) description: Option<AdjustmentDescription>,
    pub(crate) schedule: Option<Schedule>,
    pub(crate) hierarchy: [Vec<HierarchyNode>; 4],
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) location_business: IndexMap<String, LocationBusiness>,
    pub(crate) customer_business: Vec<CustomerBusiness>,
    pub(crate) item_prices: Vec<ItemPrice>,
}

impl Adjustment {
    pub(crate) fn with_header(header: AdjustmentHeader) -> Self {
        Self {
            header,
            description: None,
            schedule: None,
            hierarchy: Default::default(),
            parameters: IndexMap::new(),
            location_business: IndexMap::new(),
            customer_business: Vec::new(),
            item_prices: Vec::new(),
        }
    }

    pub fn header(&self) -> &AdjustmentHeader {
        &self.header
    }

    pub fn oid(&self) -> &str {
        &self.header.oid
    }

    pub fn external_id(&self) -> &str {
        &self.header.external_id
    }

    pub fn event(&self) -> &str {
        &self.header.event
    }

    pub fn rule_name(&self) -> &str {
        &self.header.rule_name
    }

    pub fn header_description(&self) -> &str {
        &self.header.description
    }

    /// Name to show for the adjustment: the structured description's text
    /// when one was given, the header description otherwise.
    pub fn display_name(&self) -> &str {
        self.description
            .as_ref()
            .map(|d| d.text.as_str())
            .filter(|text| !text.is_empty())
            .unwrap_or(&self.header.description)
    }

    pub fn description(&self) -> Option<&AdjustmentDescription> {
        self.description.as_ref()
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Nodes of one hierarchy, in file order.
    pub fn nodes(&self, kind: NodeKind) -> &[HierarchyNode] {
        &self.hierarchy[kind.index()]
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values()
    }

    pub fn location_business(&self, external_id: &str) -> Option<&LocationBusiness> {
        self.location_business.get(external_id)
    }

    pub fn location_businesses(&self) -> impl Iterator<Item = &LocationBusiness> {
        self.location_business.values()
    }

    pub fn customer_business(&self) -> &[CustomerBusiness] {
        &self.customer_business
    }

    pub fn item_prices(&self) -> &[ItemPrice] {
        &self.item_prices
    }

    /// Distinct style codes of the price lines, in order of first appearance.
    pub fn distinct_styles(&self) -> IndexSet<&str> {
        self.item_prices
            .iter()
            .map(|price| price.item_style_code.as_str())
            .collect()
    }

    pub fn country(&self) -> Option<&str> {
        self.parameter(COUNTRY_PARAMETER).map(|p| p.value.as_str())
    }

    pub fn category(&self) -> Option<&str> {
        self.parameter(CATEGORY_PARAMETER).map(|p| p.value.as_str())
    }
}
