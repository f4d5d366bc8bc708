//! Assembles one [`Adjustment`] from a sequence of record lines.
//!
//! Lines are processed strictly in order. Each record type dispatches to
//! exactly one `add_*` operation:
//!
//! | Code              | Effect                                     |
//! |-------------------|--------------------------------------------|
//! | `A`               | opens the adjustment; a later `A` replaces the header fields |
//! | `D`, `S`          | replaces the description / schedule slot   |
//! | `U`, `C`, `L`, `P`| appends to that hierarchy                  |
//! | `V`               | upserts the parameter by name              |
//! | `LB`              | inserts unless the store id is known       |
//! | `CB`, `I`         | appends                                    |

use tracing::{error, warn};

use crate::domain::{
    codec::RecordLine,
    entities::{
        adjustment::Adjustment,
        hierarchy::HierarchyNode,
        records::{
            AdjustmentDescription, AdjustmentHeader, CustomerBusiness, ItemPrice,
            LocationBusiness, Parameter,
        },
        schedule::Schedule,
    },
    error::DomainError,
    value_objects::{NodeKind, RecordType},
};

type Handler = fn(&mut Adjustment, &RecordLine) -> Result<(), DomainError>;

/// Stateful assembler holding the one open adjustment.
#[derive(Debug, Default)]
pub struct AdjustmentBuilder {
    adjustment: Option<Adjustment>,
}

impl AdjustmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an adjustment from raw lines in one pass.
    pub fn build<I, S>(lines: I) -> Result<Adjustment, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        for line in lines {
            builder.push_line(line.as_ref())?;
        }
        builder.finish()
    }

    /// Classify and apply one raw line.
    pub fn push_line(&mut self, raw: &str) -> Result<(), DomainError> {
        let line = RecordLine::classify(raw).inspect_err(|e| {
            error!(error = %e, "Failed to classify adjustment line");
        })?;
        self.push(&line)
    }

    /// Apply one classified line.
    pub fn push(&mut self, line: &RecordLine) -> Result<(), DomainError> {
        let handler: Handler = match line.record_type {
            RecordType::Header => return self.add_header(line),
            RecordType::Description => add_description,
            RecordType::Schedule => add_schedule,
            RecordType::UserNode => |a, l| add_node(a, NodeKind::User, l),
            RecordType::CustomerNode => |a, l| add_node(a, NodeKind::Customer, l),
            RecordType::LocationNode => |a, l| add_node(a, NodeKind::Location, l),
            RecordType::ProductNode => |a, l| add_node(a, NodeKind::Product, l),
            RecordType::Parameter => add_parameter,
            RecordType::CustomerBusiness => add_customer_business,
            RecordType::LocationBusiness => add_location_business,
            RecordType::ItemPrice => add_item_price,
        };

        let adjustment =
            self.adjustment
                .as_mut()
                .ok_or_else(|| DomainError::RecordBeforeHeader {
                    code: line.record_type.code(),
                    line: line.raw.clone(),
                })?;
        handler(adjustment, line)
    }

    /// Close the builder. Fails if no header was ever seen.
    pub fn finish(self) -> Result<Adjustment, DomainError> {
        self.adjustment.ok_or(DomainError::MissingHeader)
    }

    fn add_header(&mut self, line: &RecordLine) -> Result<(), DomainError> {
        let header = AdjustmentHeader::from_line(line)?;
        match &mut self.adjustment {
            Some(open) => {
                warn!(
                    oid = %open.oid(),
                    replaced_by = %header.oid,
                    "Repeated header record replaces the earlier one"
                );
                open.header = header;
            }
            None => self.adjustment = Some(Adjustment::with_header(header)),
        }
        Ok(())
    }
}

fn add_description(adjustment: &mut Adjustment, line: &RecordLine) -> Result<(), DomainError> {
    adjustment.description = Some(AdjustmentDescription::from_line(line)?);
    Ok(())
}

fn add_schedule(adjustment: &mut Adjustment, line: &RecordLine) -> Result<(), DomainError> {
    adjustment.schedule = Some(Schedule::from_line(line)?);
    Ok(())
}

fn add_node(
    adjustment: &mut Adjustment,
    kind: NodeKind,
    line: &RecordLine,
) -> Result<(), DomainError> {
    let node = HierarchyNode::from_line(kind, line)?;
    adjustment.hierarchy[kind.index()].push(node);
    Ok(())
}

fn add_parameter(adjustment: &mut Adjustment, line: &RecordLine) -> Result<(), DomainError> {
    let parameter = Parameter::from_line(line)?;
    adjustment
        .parameters
        .insert(parameter.name.clone(), parameter);
    Ok(())
}

fn add_location_business(
    adjustment: &mut Adjustment,
    line: &RecordLine,
) -> Result<(), DomainError> {
    let record = LocationBusiness::from_line(line)?;
    adjustment
        .location_business
        .entry(record.external_id.clone())
        .or_insert(record);
    Ok(())
}

fn add_customer_business(
    adjustment: &mut Adjustment,
    line: &RecordLine,
) -> Result<(), DomainError> {
    adjustment
        .customer_business
        .push(CustomerBusiness::from_line(line)?);
    Ok(())
}

fn add_item_price(adjustment: &mut Adjustment, line: &RecordLine) -> Result<(), DomainError> {
    adjustment.item_prices.push(ItemPrice::from_line(line)?);
    Ok(())
}
