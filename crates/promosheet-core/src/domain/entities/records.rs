//! Flat records carried by an adjustment file.
//!
//! Each record is built from one classified line by `from_line`, which checks
//! the field count and takes the payload fields positionally.

use serde::Serialize;

use crate::domain::{codec::RecordLine, error::DomainError};

/// `A` record: the adjustment header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentHeader {
    pub oid: String,
    pub external_id: String,
    pub description: String,
    pub event: String,
    pub rule_name: String,
}

impl AdjustmentHeader {
    pub fn from_line(line: &RecordLine) -> Result<Self, DomainError> {
        let [oid, external_id, description, event, rule_name] = line.payload::<5>()?;
        Ok(Self {
            oid: oid.clone(),
            external_id: external_id.clone(),
            description: description.clone(),
            event: event.clone(),
            rule_name: rule_name.clone(),
        })
    }

    /// Header fields in record order, without the type code.
    pub fn to_fields(&self) -> [&str; 5] {
        [
            self.oid.as_str(),
            self.external_id.as_str(),
            self.description.as_str(),
            self.event.as_str(),
            self.rule_name.as_str(),
        ]
    }
}

/// `D` record: localized description of the adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentDescription {
    pub language_id: String,
    pub text: String,
    pub image: String,
}

impl AdjustmentDescription {
    pub fn from_line(line: &RecordLine) -> Result<Self, DomainError> {
        let [language_id, text, image] = line.payload::<3>()?;
        Ok(Self {
            language_id: language_id.clone(),
            text: text.clone(),
            image: image.clone(),
        })
    }
}

/// `V` record: a named knob such as `Country` or `PromoCategory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    pub currency: String,
}

impl Parameter {
    pub fn from_line(line: &RecordLine) -> Result<Self, DomainError> {
        let [name, value, currency] = line.payload::<3>()?;
        Ok(Self {
            name: name.clone(),
            value: value.clone(),
            currency: currency.clone(),
        })
    }
}

/// `LB` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationBusiness {
    /// Store id.
    pub external_id: String,
    pub pricing_zone: String,
    pub business_unit: String,
}

impl LocationBusiness {
    pub fn from_line(line: &RecordLine) -> Result<Self, DomainError> {
        let [external_id, pricing_zone, business_unit] = line.payload::<3>()?;
        Ok(Self {
            external_id: external_id.clone(),
            pricing_zone: pricing_zone.clone(),
            business_unit: business_unit.clone(),
        })
    }
}

/// `CB` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerBusiness {
    pub external_id: String,
}

impl CustomerBusiness {
    pub fn from_line(line: &RecordLine) -> Result<Self, DomainError> {
        let [external_id] = line.payload::<1>()?;
        Ok(Self {
            external_id: external_id.clone(),
        })
    }
}

/// `I` record: one fully denormalized price line.
///
/// Dates and amounts are kept as they appear in the file; nothing downstream
/// does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemPrice {
    pub user_hierarchy_oid: String,
    pub user_hierarchy_name: String,

    pub customer_hierarchy_oid: String,
    pub customer_hierarchy_name: String,
    pub customer_external_id: String,

    pub location_hierarchy_oid: String,
    pub location_hierarchy_name: String,
    pub location_external_id: String,

    pub start_date: String,
    pub end_date: String,
    pub product_group_id: String,
    pub item_style_code: String,
    pub item_color: String,
    pub variant_item_name: String,
    pub price: String,
    pub currency: String,
}

impl ItemPrice {
    pub fn from_line(line: &RecordLine) -> Result<Self, DomainError> {
        let [
            user_hierarchy_oid,
            user_hierarchy_name,
            customer_hierarchy_oid,
            customer_hierarchy_name,
            customer_external_id,
            location_hierarchy_oid,
            location_hierarchy_name,
            location_external_id,
            start_date,
            end_date,
            product_group_id,
            item_style_code,
            item_color,
            variant_item_name,
            price,
            currency,
        ] = line.payload::<16>()?;
        Ok(Self {
            user_hierarchy_oid: user_hierarchy_oid.clone(),
            user_hierarchy_name: user_hierarchy_name.clone(),
            customer_hierarchy_oid: customer_hierarchy_oid.clone(),
            customer_hierarchy_name: customer_hierarchy_name.clone(),
            customer_external_id: customer_external_id.clone(),
            location_hierarchy_oid: location_hierarchy_oid.clone(),
            location_hierarchy_name: location_hierarchy_name.clone(),
            location_external_id: location_external_id.clone(),
            start_date: start_date.clone(),
            end_date: end_date.clone(),
            product_group_id: product_group_id.clone(),
            item_style_code: item_style_code.clone(),
            item_color: item_color.clone(),
            variant_item_name: variant_item_name.clone(),
            price: price.clone(),
            currency: currency.clone(),
        })
    }
}
