//! Lookup tables between cases, ids and payloads.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{DecodeError, Payload, RegistrationConflict};

/// The four lookup directions of one enum: case to id, id to case, case to payload and
/// payload to case.
///
/// Built once from the declared `(case, id, payload)` triples and never modified.
/// [id_codable](crate::id_codable) builds it on first use and keeps it for the rest of
/// the process.
#[derive(Debug, Clone)]
pub struct Registry<K, P> {
    cases: Vec<K>,
    id_of: HashMap<K, String>,
    case_of_id: HashMap<String, K>,
    payload_of: HashMap<K, P>,
    case_of_payload: HashMap<P, K>,
}

impl<K, P> Registry<K, P>
where
    K: Copy + Eq + Hash + Debug,
    P: Payload,
{
    /// Builds the registry, checking that every case, id and payload is unique and that
    /// no id is empty.
    ///
    /// Nothing is built if any triple conflicts.
    pub fn build<I, S>(triples: I) -> Result<Self, RegistrationConflict>
    where
        I: IntoIterator<Item = (K, S, P)>,
        S: Into<String>,
    {
        let triples = triples.into_iter();
        let (capacity, _) = triples.size_hint();

        let mut registry = Self {
            cases: Vec::with_capacity(capacity),
            id_of: HashMap::with_capacity(capacity),
            case_of_id: HashMap::with_capacity(capacity),
            payload_of: HashMap::with_capacity(capacity),
            case_of_payload: HashMap::with_capacity(capacity),
        };

        for (case, id, payload) in triples {
            registry.insert(case, id.into(), payload)?;
        }

        tracing::debug!(
            case_type = std::any::type_name::<K>(),
            cases = registry.cases.len(),
            "built IdCodable registry"
        );

        Ok(registry)
    }

    fn insert(&mut self, case: K, id: String, payload: P) -> Result<(), RegistrationConflict> {
        if id.is_empty() {
            return Err(RegistrationConflict::EmptyId {
                case: format!("{case:?}"),
            });
        }
        if self.id_of.contains_key(&case) {
            return Err(RegistrationConflict::DuplicateCase {
                case: format!("{case:?}"),
            });
        }

        let id_slot = match self.case_of_id.entry(id) {
            Entry::Occupied(existing) => {
                return Err(RegistrationConflict::DuplicateId {
                    id: existing.key().clone(),
                    first: format!("{:?}", existing.get()),
                    second: format!("{case:?}"),
                });
            }
            Entry::Vacant(slot) => slot,
        };
        if let Some(existing) = self.case_of_payload.get(&payload) {
            return Err(RegistrationConflict::DuplicatePayload {
                payload: payload.to_string(),
                first: format!("{existing:?}"),
                second: format!("{case:?}"),
            });
        }

        if payload.is_empty_value() {
            tracing::warn!(
                case = ?case,
                "registered an empty payload; this case cannot be decoded by codable"
            );
        }

        self.id_of.insert(case, id_slot.key().clone());
        id_slot.insert(case);
        self.payload_of.insert(case, payload.clone());
        self.case_of_payload.insert(payload, case);
        self.cases.push(case);
        Ok(())
    }

    /// The registered cases, in declaration order.
    pub fn cases(&self) -> &[K] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The id of `case`.
    ///
    /// # Panics
    /// If `case` was not registered. Registries built by [id_codable](crate::id_codable)
    /// contain every case of their enum.
    pub fn id_for(&self, case: K) -> &str {
        match self.id_of.get(&case) {
            Some(id) => id,
            None => panic!("{case:?} has no registered id"),
        }
    }

    /// The payload of `case`.
    ///
    /// # Panics
    /// If `case` was not registered.
    pub fn payload_for(&self, case: K) -> &P {
        match self.payload_of.get(&case) {
            Some(payload) => payload,
            None => panic!("{case:?} has no registered payload"),
        }
    }

    /// The case registered under `id`. The empty string never matches.
    pub fn case_for_id(&self, id: &str) -> Option<K> {
        if id.is_empty() {
            return None;
        }
        self.case_of_id.get(id).copied()
    }

    /// The case registered with a payload equal to `payload`. An empty string payload
    /// never matches.
    pub fn case_for_payload(&self, payload: &P) -> Option<K> {
        if payload.is_empty_value() {
            return None;
        }
        self.case_of_payload.get(payload).copied()
    }

    /// Decodes an id read from a container.
    pub fn decode_id(&self, raw: &str) -> Result<K, DecodeError> {
        if raw.is_empty() {
            return Err(DecodeError::EmptyValue);
        }
        self.case_for_id(raw).ok_or_else(|| {
            tracing::trace!(
                case_type = std::any::type_name::<K>(),
                id = raw,
                "no case matches id"
            );
            DecodeError::InvalidValue
        })
    }

    /// Decodes a payload read from a container.
    pub fn decode_payload(&self, raw: &P) -> Result<K, DecodeError> {
        if raw.is_empty_value() {
            return Err(DecodeError::EmptyValue);
        }
        self.case_for_payload(raw).ok_or_else(|| {
            tracing::trace!(
                case_type = std::any::type_name::<K>(),
                payload = %raw,
                "no case matches payload"
            );
            DecodeError::InvalidValue
        })
    }
}
