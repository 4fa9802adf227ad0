//! The joined rate catalog.

use std::collections::HashMap;

use tracing::debug;

use petsched_core::ServiceTypeId;

use crate::records::{RawRow, ServiceRateRecord, ServiceTypeRecord};

/// The catalog both pricing and invoicing consult: service types plus rate
/// rows, read fresh from the storage layer before each computation pass.
///
/// Rows are held in storage order; rate matching is first-match-wins, so
/// order is semantically meaningful.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateCatalog {
    service_types: Vec<ServiceTypeRecord>,
    rates: Vec<ServiceRateRecord>,
}

/// One active rate row joined with its service type's name.
///
/// The join is a left join: a rate whose `service_type_id` matches no active
/// service type keeps `service_type_name = None` (it can still appear in the
/// tier tables, labelled "Unknown", but never matches an appointment).
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRate<'a> {
    pub rate: &'a ServiceRateRecord,
    pub service_type_name: Option<&'a str>,
}

impl RateCatalog {
    pub fn new(service_types: Vec<ServiceTypeRecord>, rates: Vec<ServiceRateRecord>) -> Self {
        Self {
            service_types,
            rates,
        }
    }

    /// Parse both tables from storage-layer rows.
    pub fn from_rows(service_type_rows: &[RawRow], rate_rows: &[RawRow]) -> Self {
        let service_types = service_type_rows
            .iter()
            .map(ServiceTypeRecord::from_row)
            .collect::<Vec<_>>();
        let rates = rate_rows
            .iter()
            .map(ServiceRateRecord::from_row)
            .collect::<Vec<_>>();
        debug!(
            service_types = service_types.len(),
            rates = rates.len(),
            "catalog loaded"
        );
        Self::new(service_types, rates)
    }

    pub fn is_empty(&self) -> bool {
        self.service_types.is_empty() || self.rates.is_empty()
    }

    pub fn active_service_types(&self) -> impl Iterator<Item = &ServiceTypeRecord> {
        self.service_types.iter().filter(|t| t.is_active)
    }

    pub fn active_rates(&self) -> impl Iterator<Item = &ServiceRateRecord> {
        self.rates.iter().filter(|r| r.is_active)
    }

    /// First active service type with the given name, if any.
    pub fn service_type_by_name(&self, name: &str) -> Option<&ServiceTypeRecord> {
        self.active_service_types().find(|t| t.name == name)
    }

    /// Whether appointments of the named type are end-time-based.
    /// Unknown names default to duration-based.
    pub fn uses_end_date(&self, name: &str) -> bool {
        self.service_type_by_name(name)
            .map(|t| t.uses_end_date)
            .unwrap_or(false)
    }

    /// Active rate rows joined with active service-type names, in storage
    /// order.
    pub fn joined(&self) -> impl Iterator<Item = JoinedRate<'_>> {
        let names: HashMap<&ServiceTypeId, &str> = self
            .active_service_types()
            .map(|t| (&t.id, t.name.as_str()))
            .collect();
        self.active_rates().map(move |rate| JoinedRate {
            rate,
            service_type_name: names.get(&rate.service_type_id).copied(),
        })
    }
}
