//! Read-only storage boundary for protocol resolution. The engine
//! never writes; all methods are reads the storage collaborator
//! answers from its own schema.

use std::collections::HashMap;

use motus_core::models::{IntakeAssessment, Protocol, Routine};
use uuid::Uuid;

use crate::error::StoreError;
use crate::protocols::reference_data;

/// Reads the resolver needs. Implementations return `Ok(None)` for
/// absent rows; `Err` is reserved for the store being unreachable.
pub trait ProtocolStore {
    /// The user's most recent assessment that selected a protocol.
    fn latest_assessment_with_protocol(
        &self,
        user_id: Uuid,
    ) -> Result<Option<IntakeAssessment>, StoreError>;

    fn protocol_by_key(&self, key: &str) -> Result<Option<Protocol>, StoreError>;

    /// Primary routine mapping, keyed by protocol id + phase number.
    fn routine_for_phase(
        &self,
        protocol_id: Uuid,
        phase_number: u32,
    ) -> Result<Option<Routine>, StoreError>;

    /// Secondary routine mapping, keyed by the phase's own id.
    fn routine_for_phase_id(&self, phase_id: Uuid) -> Result<Option<Routine>, StoreError>;
}

/// In-memory store over the embedded reference data. Production
/// backends implement [`ProtocolStore`] against real storage; tests
/// seed this one with fixtures.
pub struct InMemoryProtocolStore {
    protocols: Vec<Protocol>,
    routines_by_phase_number: HashMap<(Uuid, u32), Routine>,
    routines_by_phase_id: HashMap<Uuid, Routine>,
    assessments: Vec<IntakeAssessment>,
}

impl InMemoryProtocolStore {
    /// A store seeded with the embedded protocol reference data and
    /// no user assessments.
    pub fn with_reference_data() -> Self {
        let reference = reference_data();
        Self {
            protocols: reference.protocols.clone(),
            routines_by_phase_number: reference.routines_by_phase_number.clone(),
            routines_by_phase_id: reference.routines_by_phase_id.clone(),
            assessments: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self {
            protocols: Vec::new(),
            routines_by_phase_number: HashMap::new(),
            routines_by_phase_id: HashMap::new(),
            assessments: Vec::new(),
        }
    }

    pub fn push_assessment(&mut self, assessment: IntakeAssessment) {
        self.assessments.push(assessment);
    }

    pub fn insert_protocol(&mut self, protocol: Protocol) {
        self.protocols.push(protocol);
    }

    pub fn insert_routine(&mut self, protocol_id: Uuid, phase_number: u32, routine: Routine) {
        self.routines_by_phase_number
            .insert((protocol_id, phase_number), routine);
    }

    pub fn insert_routine_for_phase_id(&mut self, phase_id: Uuid, routine: Routine) {
        self.routines_by_phase_id.insert(phase_id, routine);
    }
}

impl ProtocolStore for InMemoryProtocolStore {
    fn latest_assessment_with_protocol(
        &self,
        user_id: Uuid,
    ) -> Result<Option<IntakeAssessment>, StoreError> {
        Ok(self
            .assessments
            .iter()
            .filter(|a| a.user_id == user_id && a.selected_protocol_key.is_some())
            .max_by_key(|a| a.created_at)
            .cloned())
    }

    fn protocol_by_key(&self, key: &str) -> Result<Option<Protocol>, StoreError> {
        Ok(self.protocols.iter().find(|p| p.key == key).cloned())
    }

    fn routine_for_phase(
        &self,
        protocol_id: Uuid,
        phase_number: u32,
    ) -> Result<Option<Routine>, StoreError> {
        Ok(self
            .routines_by_phase_number
            .get(&(protocol_id, phase_number))
            .cloned())
    }

    fn routine_for_phase_id(&self, phase_id: Uuid) -> Result<Option<Routine>, StoreError> {
        Ok(self.routines_by_phase_id.get(&phase_id).cloned())
    }
}
