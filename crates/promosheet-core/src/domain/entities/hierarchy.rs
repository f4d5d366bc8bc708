//! Hierarchy scoping nodes (`U`, `C`, `L`, `P` records).

use serde::Serialize;

use crate::domain::{codec::RecordLine, error::DomainError, value_objects::NodeKind};

/// Fields every hierarchy node carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeBase {
    /// Node type as written in the record.
    pub node_type: String,
    pub include_exclude_flag: String,
    pub hierarchy_oid: String,
    pub hierarchy_name: String,
}

/// A node restricting or including an adjustment's applicability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HierarchyNode {
    User(NodeBase),
    Customer {
        base: NodeBase,
        customer_external_id: String,
    },
    Location {
        base: NodeBase,
        location_external_id: String,
    },
    Product {
        base: NodeBase,
        product_group_id: String,
        item_name: String,
    },
}

impl HierarchyNode {
    /// Build the `kind` variant from a node record.
    pub fn from_line(kind: NodeKind, line: &RecordLine) -> Result<Self, DomainError> {
        match kind {
            NodeKind::User => {
                let [node_type, flag, oid, name] = line.payload::<4>()?;
                Ok(Self::User(NodeBase::new(node_type, flag, oid, name)))
            }
            NodeKind::Customer => {
                let [node_type, flag, oid, name, external_id] = line.payload::<5>()?;
                Ok(Self::Customer {
                    base: NodeBase::new(node_type, flag, oid, name),
                    customer_external_id: external_id.clone(),
                })
            }
            NodeKind::Location => {
                let [node_type, flag, oid, name, external_id] = line.payload::<5>()?;
                Ok(Self::Location {
                    base: NodeBase::new(node_type, flag, oid, name),
                    location_external_id: external_id.clone(),
                })
            }
            NodeKind::Product => {
                let [node_type, flag, oid, name, group, item_name] = line.payload::<6>()?;
                Ok(Self::Product {
                    base: NodeBase::new(node_type, flag, oid, name),
                    product_group_id: group.clone(),
                    item_name: item_name.clone(),
                })
            }
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::User(_) => NodeKind::User,
            Self::Customer { .. } => NodeKind::Customer,
            Self::Location { .. } => NodeKind::Location,
            Self::Product { .. } => NodeKind::Product,
        }
    }

    pub fn base(&self) -> &NodeBase {
        match self {
            Self::User(base)
            | Self::Customer { base, .. }
            | Self::Location { base, .. }
            | Self::Product { base, .. } => base,
        }
    }

    /// Customer or location external id, if the variant has one.
    pub fn external_id(&self) -> Option<&str> {
        match self {
            Self::Customer {
                customer_external_id,
                ..
            } => Some(customer_external_id.as_str()),
            Self::Location {
                location_external_id,
                ..
            } => Some(location_external_id.as_str()),
            Self::User(_) | Self::Product { .. } => None,
        }
    }
}

impl NodeBase {
    fn new(node_type: &str, flag: &str, oid: &str, name: &str) -> Self {
        Self {
            node_type: node_type.to_string(),
            include_exclude_flag: flag.to_string(),
            hierarchy_oid: oid.to_string(),
            hierarchy_name: name.to_string(),
        }
    }
}
