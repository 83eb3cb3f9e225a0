// 🗄️ Record Store - Works, individuals and the credits linking them
//
// Built once by a single ingestion pass, read-only afterwards.
// Identity = sequential id (first encounter order), Individual name = unique key.

use crate::error::{AwardsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

// ============================================================================
// IDENTIFIERS
// ============================================================================

/// Opaque work identifier (1-based, assigned in insertion order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkId(pub u64);

/// Opaque individual identifier (1-based, assigned on first encounter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndividualId(pub u64);

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ENTITIES
// ============================================================================

/// A single credited entry (e.g. a film)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    pub id: WorkId,
    pub year: i32,
    pub title: String,
    pub distributor: String,
    pub is_winner: bool,
}

/// A named party credited on works
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub id: IndividualId,
    pub name: String,
}

// ============================================================================
// RECORD STORE
// ============================================================================

/// In-memory tables for works, individuals and credits
///
/// Precondition: populated by exactly one ingestion pass. The loaders in
/// `parser` always build a fresh store; there is no update or delete path.
#[derive(Debug)]
pub struct RecordStore {
    works: Vec<Work>,
    individuals: Vec<Individual>,
    name_index: HashMap<String, IndividualId>,
    credits: HashSet<(WorkId, IndividualId)>,
    /// Works per individual, in credit order
    works_by_individual: Vec<Vec<WorkId>>,
    /// Individuals per work, in credit order
    individuals_by_work: Vec<Vec<IndividualId>>,
    loaded_at: DateTime<Utc>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore {
            works: Vec::new(),
            individuals: Vec::new(),
            name_index: HashMap::new(),
            credits: HashSet::new(),
            works_by_individual: Vec::new(),
            individuals_by_work: Vec::new(),
            loaded_at: Utc::now(),
        }
    }

    // ------------------------------------------------------------------------
    // Ingestion (write path)
    // ------------------------------------------------------------------------

    /// Insert a work and return its id
    pub fn add_work(&mut self, year: i32, title: &str, distributor: &str, is_winner: bool) -> WorkId {
        let id = WorkId(self.works.len() as u64 + 1);
        self.works.push(Work {
            id,
            year,
            title: title.to_string(),
            distributor: distributor.to_string(),
            is_winner,
        });
        self.individuals_by_work.push(Vec::new());
        id
    }

    /// Credit `name` on a work, creating the individual on first sight.
    ///
    /// Idempotent per (work, individual) pair.
    pub fn credit_individual(&mut self, work_id: WorkId, name: &str) -> Result<IndividualId> {
        let work_idx = self.work_index(work_id).ok_or(AwardsError::UnknownWork(work_id))?;
        let individual_id = self.lookup_or_create(name);

        if self.credits.insert((work_id, individual_id)) {
            self.individuals_by_work[work_idx].push(individual_id);
            self.works_by_individual[Self::slot(individual_id.0)].push(work_id);
        }

        Ok(individual_id)
    }

    fn lookup_or_create(&mut self, name: &str) -> IndividualId {
        if let Some(id) = self.name_index.get(name) {
            return *id;
        }

        let id = IndividualId(self.individuals.len() as u64 + 1);
        self.individuals.push(Individual {
            id,
            name: name.to_string(),
        });
        self.works_by_individual.push(Vec::new());
        self.name_index.insert(name.to_string(), id);
        id
    }

    // ------------------------------------------------------------------------
    // Read contracts used by the win extractor
    // ------------------------------------------------------------------------

    /// Winning works credited to an individual, in insertion order
    pub fn winning_works_credited_to(&self, individual_id: IndividualId) -> Result<Vec<&Work>> {
        let work_ids = self
            .individual_index(individual_id)
            .map(|idx| &self.works_by_individual[idx])
            .ok_or(AwardsError::UnknownIndividual(individual_id))?;

        let mut winners = Vec::new();
        for work_id in work_ids {
            let work = self.work(*work_id).ok_or(AwardsError::UnknownWork(*work_id))?;
            if work.is_winner {
                winners.push(work);
            }
        }

        Ok(winners)
    }

    /// Individuals credited on at least `n` distinct winning works,
    /// ordered by first encounter
    pub fn individuals_with_at_least_n_wins(&self, n: usize) -> Vec<&Individual> {
        self.individuals
            .iter()
            .zip(&self.works_by_individual)
            .filter(|(_, work_ids)| {
                work_ids
                    .iter()
                    .filter(|id| self.work(**id).is_some_and(|w| w.is_winner))
                    .count()
                    >= n
            })
            .map(|(individual, _)| individual)
            .collect()
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    pub fn work(&self, id: WorkId) -> Option<&Work> {
        self.work_index(id).map(|idx| &self.works[idx])
    }

    pub fn individual(&self, id: IndividualId) -> Option<&Individual> {
        self.individual_index(id).map(|idx| &self.individuals[idx])
    }

    /// Exact-match lookup; the name is the sole identity key
    pub fn individual_by_name(&self, name: &str) -> Option<&Individual> {
        self.name_index.get(name).and_then(|id| self.individual(*id))
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Individuals credited on a work, in credit order
    pub fn credits_for_work(&self, work_id: WorkId) -> Result<Vec<&Individual>> {
        let idx = self.work_index(work_id).ok_or(AwardsError::UnknownWork(work_id))?;
        Ok(self.individuals_by_work[idx]
            .iter()
            .filter_map(|id| self.individual(*id))
            .collect())
    }

    pub fn has_credit(&self, work_id: WorkId, individual_id: IndividualId) -> bool {
        self.credits.contains(&(work_id, individual_id))
    }

    pub fn work_count(&self) -> usize {
        self.works.len()
    }

    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    pub fn credit_count(&self) -> usize {
        self.credits.len()
    }

    /// When this store was built
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    fn slot(raw: u64) -> usize {
        (raw - 1) as usize
    }

    fn work_index(&self, id: WorkId) -> Option<usize> {
        (id.0 >= 1 && id.0 as usize <= self.works.len()).then(|| Self::slot(id.0))
    }

    fn individual_index(&self, id: IndividualId) -> Option<usize> {
        (id.0 >= 1 && id.0 as usize <= self.individuals.len()).then(|| Self::slot(id.0))
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
